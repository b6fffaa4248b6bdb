//! 中文数字解码器
//!
//! 线性状态机：逐个读取 Occurrence，得到精确的整数值。
//!
//! 规则概要：
//! - 数字连写按位组合（"一一一" = 111，"一零一" = 101）
//! - 十百千在同一段内必须严格递减，单位前的数字不得超出段落容量
//! - 萬億兆……必须严格递减，每段不超过 9999
//! - 省略式："十" = 10，"億" = 10^8，"一千七百五" = 1750，"三萬五" = 35000
//! - 零作为占位符时连续多个视为一个，之后的数字落在个位（"一千零一" = 1001）

use smallvec::SmallVec;

use crate::error::ParseError;
use crate::numeral::catalog::{GroupUnit, TinyUnit, TokenKind};
use crate::numeral::tokenizer::Occurrence;
use crate::numeral::value::MAX_VALUE;

/// 一个段落内最多的位数
const SECTION_WIDTH: u32 = 4;

/// 大单位只有七级，严格递减时最多七段
const MAX_GROUPS: usize = GroupUnit::ALL.len();

/// 连写数字最多的位数（10^32 - 1 共 32 位）
const MAX_RUN_WIDTH: u32 = 32;

/// 尚未乘上单位的连写数字
#[derive(Debug, Clone, Copy)]
struct DigitRun {
    value: u128,
    /// 位数（开头的零不计）
    width: u32,
    /// 最后一个数字，报错时使用
    glyph: char,
    index: usize,
}

/// 解码器状态，每次解析新建
#[derive(Debug)]
pub struct Decoder {
    /// 已乘上大单位的各段
    groups: SmallVec<[u128; MAX_GROUPS]>,
    /// 当前段的累加值
    group_sum: u128,
    run: Option<DigitRun>,
    /// 上一个字是可合并的占位零
    previous_zero: bool,
    /// 自上个单位以来出现过占位零
    zero_gap: bool,
    last_tiny: Option<TinyUnit>,
    last_group: Option<GroupUnit>,
}

impl Decoder {
    fn new() -> Self {
        Self {
            groups: SmallVec::new(),
            group_sum: 0,
            run: None,
            previous_zero: false,
            zero_gap: false,
            last_tiny: None,
            last_group: None,
        }
    }

    /// 解码 Occurrence 序列
    ///
    /// # 返回
    /// - `Ok(u128)`: 解码后的数值
    /// - `Err`: 单位顺序错误或段落溢出，不返回部分结果
    pub fn decode(occurrences: &[Occurrence]) -> Result<u128, ParseError> {
        let last = occurrences.last().ok_or_else(ParseError::empty_input)?;

        let mut decoder = Self::new();
        for occurrence in occurrences {
            decoder.feed(occurrence)?;
        }

        let value = decoder.finish()?;
        if value > MAX_VALUE {
            return Err(ParseError::segment_overflow(last.glyph, last.index));
        }
        Ok(value)
    }

    fn feed(&mut self, occurrence: &Occurrence) -> Result<(), ParseError> {
        match occurrence.token.kind() {
            TokenKind::Zero => self.push_zero(occurrence)?,
            TokenKind::Digit(digit) => self.push_digit(digit, occurrence)?,
            TokenKind::Tiny(unit) => self.apply_tiny(unit, occurrence)?,
            TokenKind::Group(unit) => self.apply_group(unit, occurrence)?,
            TokenKind::Unknown => {
                return Err(ParseError::unknown_character(
                    occurrence.glyph,
                    occurrence.index,
                ))
            }
        }
        Ok(())
    }

    fn push_zero(&mut self, occurrence: &Occurrence) -> Result<(), ParseError> {
        // 连写数字中的零是真正的一位
        if let Some(run) = self.run.as_mut() {
            if run.width > 0 {
                if run.width >= MAX_RUN_WIDTH {
                    return Err(ParseError::segment_overflow(
                        occurrence.glyph,
                        occurrence.index,
                    ));
                }
                run.value *= 10;
                run.width += 1;
                run.glyph = occurrence.glyph;
                run.index = occurrence.index;
                self.previous_zero = false;
                return Ok(());
            }
        }

        if self.previous_zero {
            return Ok(());
        }

        if self.run.is_none() && self.last_tiny.is_none() && self.last_group.is_none() {
            // 开头的零："零十" = 0，"零零一二" = 12
            self.run = Some(DigitRun {
                value: 0,
                width: 0,
                glyph: occurrence.glyph,
                index: occurrence.index,
            });
        } else {
            self.zero_gap = true;
        }
        self.previous_zero = true;
        Ok(())
    }

    fn push_digit(&mut self, digit: u8, occurrence: &Occurrence) -> Result<(), ParseError> {
        self.previous_zero = false;

        let run = match self.run {
            Some(run) if run.width >= MAX_RUN_WIDTH => {
                return Err(ParseError::segment_overflow(
                    occurrence.glyph,
                    occurrence.index,
                ))
            }
            Some(run) => DigitRun {
                value: run.value * 10 + u128::from(digit),
                width: run.width + 1,
                glyph: occurrence.glyph,
                index: occurrence.index,
            },
            None => DigitRun {
                value: u128::from(digit),
                width: 1,
                glyph: occurrence.glyph,
                index: occurrence.index,
            },
        };
        self.run = Some(run);
        Ok(())
    }

    fn apply_tiny(&mut self, unit: TinyUnit, occurrence: &Occurrence) -> Result<(), ParseError> {
        if let Some(last) = self.last_tiny {
            if unit >= last {
                return Err(ParseError::invalid_unit_position(
                    occurrence.glyph,
                    occurrence.index,
                ));
            }
        }

        match self.run.take() {
            Some(run) => {
                if run.width + unit.exponent() > SECTION_WIDTH {
                    return Err(ParseError::segment_overflow(
                        occurrence.glyph,
                        occurrence.index,
                    ));
                }
                self.group_sum += run.value * unit.magnitude();
            }
            // "十" = 10，"千百十" = 1110
            None => self.group_sum += unit.magnitude(),
        }

        self.last_tiny = Some(unit);
        self.previous_zero = false;
        self.zero_gap = false;
        Ok(())
    }

    fn apply_group(&mut self, unit: GroupUnit, occurrence: &Occurrence) -> Result<(), ParseError> {
        if let Some(last) = self.last_group {
            if unit >= last {
                return Err(ParseError::invalid_unit_position(
                    occurrence.glyph,
                    occurrence.index,
                ));
            }
        }

        let section = match self.run.take() {
            Some(run) => {
                let placed = match self.last_tiny {
                    Some(tiny) => self.place(run, tiny.exponent())?,
                    None if run.width > SECTION_WIDTH => {
                        return Err(ParseError::segment_overflow(
                            occurrence.glyph,
                            occurrence.index,
                        ))
                    }
                    None => run.value,
                };
                self.group_sum + placed
            }
            // "億" = 10^8
            None if self.group_sum == 0 => 1,
            None => self.group_sum,
        };

        if section > 9999 {
            return Err(ParseError::segment_overflow(
                occurrence.glyph,
                occurrence.index,
            ));
        }

        if self.groups.len() == MAX_GROUPS {
            return Err(ParseError::segment_overflow(
                occurrence.glyph,
                occurrence.index,
            ));
        }
        self.groups.push(section * unit.magnitude());

        self.group_sum = 0;
        self.last_tiny = None;
        self.last_group = Some(unit);
        self.previous_zero = false;
        self.zero_gap = false;
        Ok(())
    }

    /// 把末尾连写的数字放到最后一个单位之下
    ///
    /// 没有占位零时右对齐到单位的下一位起（"一千七百五" → 50，"一一百一一" → 11）；
    /// 有占位零时落在个位（"一千零一" → 1）。放不下则为段落溢出。
    fn place(&self, run: DigitRun, exponent: u32) -> Result<u128, ParseError> {
        let limit = exponent.min(SECTION_WIDTH);
        let overflow = || ParseError::segment_overflow(run.glyph, run.index);

        if self.zero_gap {
            if run.width >= limit {
                return Err(overflow());
            }
            return Ok(run.value);
        }

        if run.width > limit {
            return Err(overflow());
        }
        Ok(run.value * 10u128.pow(exponent - run.width))
    }

    fn finish(mut self) -> Result<u128, ParseError> {
        if let Some(run) = self.run.take() {
            let placed = if let Some(tiny) = self.last_tiny {
                self.place(run, tiny.exponent())?
            } else if let Some(group) = self.last_group {
                self.place(run, group.exponent())?
            } else {
                run.value
            };
            self.group_sum += placed;
        }

        Ok(self.group_sum + self.groups.iter().sum::<u128>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use crate::numeral::tokenizer::Tokenizer;

    fn decode(text: &str) -> Result<u128, ParseError> {
        Decoder::decode(&Tokenizer::tokenize(text)?)
    }

    #[test]
    fn test_plain_digits() {
        assert_eq!(decode("零").unwrap(), 0);
        assert_eq!(decode("三三").unwrap(), 33);
        assert_eq!(decode("六九七").unwrap(), 697);
        assert_eq!(decode("一一一一一一").unwrap(), 111_111);
        assert_eq!(decode("壹壹肆伍壹肆").unwrap(), 114_514);
        assert_eq!(decode("一零一").unwrap(), 101);
        assert_eq!(decode("一〇〇").unwrap(), 100);
    }

    #[test]
    fn test_tiny_multipliers() {
        assert_eq!(decode("十一").unwrap(), 11);
        assert_eq!(decode("一十一").unwrap(), 11);
        assert_eq!(decode("四十四").unwrap(), 44);
        assert_eq!(decode("六百九十七").unwrap(), 697);
        assert_eq!(decode("一千二百三十四").unwrap(), 1234);
        assert_eq!(decode("一一百").unwrap(), 1100);
        assert_eq!(decode("一一一十").unwrap(), 1110);
        assert_eq!(decode("一一百一一").unwrap(), 1111);
    }

    #[test]
    fn test_elliptical_forms() {
        assert_eq!(decode("千").unwrap(), 1000);
        assert_eq!(decode("千百十").unwrap(), 1110);
        assert_eq!(decode("千十").unwrap(), 1010);
        assert_eq!(decode("千一百一十一").unwrap(), 1111);
        assert_eq!(decode("一千百一").unwrap(), 1110);
        assert_eq!(decode("八百八").unwrap(), 880);
        assert_eq!(decode("一千七百五").unwrap(), 1750);
        assert_eq!(decode("一千四").unwrap(), 1400);
        assert_eq!(decode("三萬五").unwrap(), 35_000);
        assert_eq!(decode("一億一").unwrap(), 110_000_000);
    }

    #[test]
    fn test_zero_placeholders() {
        assert_eq!(decode("三千零七十三").unwrap(), 3073);
        assert_eq!(decode("一千零一").unwrap(), 1001);
        assert_eq!(decode("一千零一十").unwrap(), 1010);
        assert_eq!(decode("一千零一十一").unwrap(), 1011);
        assert_eq!(decode("一千二百零四").unwrap(), 1204);
        assert_eq!(decode("一千二百三十零").unwrap(), 1230);
        assert_eq!(decode("千零十").unwrap(), 1010);
        assert_eq!(decode("一億零一").unwrap(), 100_000_001);
        assert_eq!(decode("一萬零十").unwrap(), 10_010);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(decode("零一").unwrap(), 1);
        assert_eq!(decode("零零零一").unwrap(), 1);
        assert_eq!(decode("零零一二").unwrap(), 12);
        assert_eq!(decode("零零一十二").unwrap(), 12);
        assert_eq!(decode("零零零零").unwrap(), 0);
        assert_eq!(decode("零十").unwrap(), 0);
        assert_eq!(decode("零零十二").unwrap(), 2);
    }

    #[test]
    fn test_group_multipliers() {
        assert_eq!(decode("億").unwrap(), 100_000_000);
        assert_eq!(decode("百萬").unwrap(), 1_000_000);
        assert_eq!(decode("億百萬").unwrap(), 101_000_000);
        assert_eq!(decode("兆百億").unwrap(), 1_010_000_000_000);
        assert_eq!(decode("二一萬").unwrap(), 210_000);
        assert_eq!(decode("一十一萬").unwrap(), 110_000);
        assert_eq!(decode("一千零萬").unwrap(), 10_000_000);
        assert_eq!(decode("七千零萬一二百五二").unwrap(), 70_001_252);
        assert_eq!(decode("一百億四千萬二千").unwrap(), 10_040_002_000);
        assert_eq!(decode("一穰").unwrap(), 10u128.pow(28));
    }

    #[test]
    fn test_invalid_unit_position() {
        let err = decode("一百千").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidUnitPosition);
        assert_eq!(err.glyph(), Some('千'));
        assert_eq!(err.index(), Some(2));

        assert_eq!(
            decode("十百").unwrap_err().kind(),
            ParseErrorKind::InvalidUnitPosition
        );
        assert_eq!(
            decode("一十二十").unwrap_err().kind(),
            ParseErrorKind::InvalidUnitPosition
        );
        assert_eq!(
            decode("萬萬").unwrap_err().kind(),
            ParseErrorKind::InvalidUnitPosition
        );
    }

    #[test]
    fn test_compound_group_rejected() {
        // 萬億 不当作兆
        let err = decode("一萬億").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidUnitPosition);
        assert_eq!(err.glyph(), Some('億'));
        assert_eq!(err.index(), Some(2));

        assert_eq!(decode("一兆").unwrap(), 1_000_000_000_000);
    }

    #[test]
    fn test_tiny_order_resets_per_group() {
        assert_eq!(decode("一十萬一千").unwrap(), 101_000);
    }

    #[test]
    fn test_segment_overflow() {
        for text in ["一一一千", "一一一百", "一零一百", "一一一一一萬", "十一一"] {
            let err = decode(text).unwrap_err();
            assert_eq!(err.kind(), ParseErrorKind::SegmentOverflow, "{}", text);
        }

        let err = decode("一一一千").unwrap_err();
        assert_eq!(err.index(), Some(3));
    }

    #[test]
    fn test_section_limit() {
        let err = decode("九千九九百萬").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::SegmentOverflow);
        assert_eq!(err.glyph(), Some('萬'));
    }

    #[test]
    fn test_long_digit_run() {
        let max = "9".repeat(32);
        assert_eq!(decode(&max).unwrap(), MAX_VALUE);

        let err = decode(&"9".repeat(33)).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::SegmentOverflow);
        assert_eq!(err.index(), Some(32));

        assert!(decode(&"1".repeat(60)).is_err());
    }

    #[test]
    fn test_largest_value() {
        let text = "九千九百九十九穰九千九百九十九秭九千九百九十九垓九千九百九十九京\
                    九千九百九十九兆九千九百九十九億九千九百九十九萬九千九百九十九";
        assert_eq!(decode(text).unwrap(), MAX_VALUE);
    }
}
