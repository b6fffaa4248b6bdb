//! 中文数字编码器
//!
//! 把整数按萬拆成若干段（每段 0..=9999），逐段写出后再拼上大单位，
//! 段与段之间按需补一个零。

use smallvec::SmallVec;

use crate::numeral::profile::{CompositionMode, FormatterProfile};
use crate::numeral::value::Numeral;

const SECTION_BASE: u128 = 10_000;

/// 10^32 - 1 最多 8 段
const MAX_SECTIONS: usize = 8;

/// 段落构造器，每次编码新建
struct SegmentBuilder<'p> {
    profile: &'p FormatterProfile,
    output: String,
    /// 低一段的文字以零开头，已经补过零
    compensated: bool,
    last_is_zero: bool,
}

impl<'p> SegmentBuilder<'p> {
    fn new(profile: &'p FormatterProfile) -> Self {
        Self {
            profile,
            output: String::new(),
            compensated: false,
            last_is_zero: false,
        }
    }

    /// 从低到高加入各段
    fn push_section(&mut self, section: u16, rank: usize, lead: bool) {
        if section == 0 {
            if lead {
                // 只有整个数为 0 时首段才会是 0
                self.output.insert_str(0, self.profile.zero());
            } else if rank != 0 && !self.last_is_zero && !self.compensated {
                self.output.insert_str(0, self.profile.zero());
                self.compensated = true;
            }
            self.last_is_zero = true;
            return;
        }

        let mut text = self.render_section(section, lead);
        self.compensated = text.starts_with(self.profile.zero());
        self.last_is_zero = false;

        text.push_str(self.profile.group_unit(rank));
        self.output.insert_str(0, &text);
    }

    /// 写出一段（1..=9999）
    fn render_section(&self, section: u16, lead: bool) -> String {
        // 下标即位次：0 = 个位 … 3 = 千位
        let digits: [u16; 4] = [1, 10, 100, 1000].map(|place| section / place % 10);

        let mut text = String::new();
        let Some(top) = (0..digits.len()).rev().find(|&position| digits[position] != 0) else {
            return text;
        };

        if !lead && top < 3 {
            text.push_str(self.profile.zero());
        }
        if lead && top == 1 && digits[top] == 1 {
            // "拾伍" 而不是 "壹拾伍"
            text.push_str(self.profile.tiny_unit(1));
        } else {
            self.push_place(&mut text, digits[top], top);
        }

        let mut pending_zero = false;
        for position in (0..top).rev() {
            if digits[position] == 0 {
                pending_zero = true;
                continue;
            }
            if pending_zero {
                text.push_str(self.profile.zero());
                pending_zero = false;
            }
            self.push_place(&mut text, digits[position], position);
        }

        text
    }

    fn push_place(&self, text: &mut String, digit: u16, position: usize) {
        text.push_str(self.profile.digit(usize::from(digit)));
        if position > 0 {
            text.push_str(self.profile.tiny_unit(position));
        }
    }

    fn finish(self) -> String {
        self.output
    }
}

/// 按字表输出数值
pub fn encode(value: Numeral, profile: &FormatterProfile) -> String {
    let value = value.value();
    match profile.mode() {
        CompositionMode::Substitution { mapped: false } => value.to_string(),
        CompositionMode::Substitution { mapped: true } => value
            .to_string()
            .bytes()
            .map(|b| profile.digit(usize::from(b - b'0')))
            .collect(),
        CompositionMode::Segmented => encode_segmented(value, profile),
    }
}

fn encode_segmented(value: u128, profile: &FormatterProfile) -> String {
    let mut sections: SmallVec<[u16; MAX_SECTIONS]> = SmallVec::new();
    let mut rest = value;
    loop {
        sections.push((rest % SECTION_BASE) as u16);
        rest /= SECTION_BASE;
        if rest == 0 {
            break;
        }
    }

    let mut builder = SegmentBuilder::new(profile);
    let count = sections.len();
    for (rank, &section) in sections.iter().enumerate() {
        builder.push_section(section, rank, rank + 1 == count);
    }
    builder.finish()
}
