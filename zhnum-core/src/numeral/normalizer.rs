//! Numeral Normalizer - 文本内数字统一
//!
//! 找出文本中连续的数字字符，逐段解析后按目标格式改写，
//! 并记录每一处改动以便回滚。

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::numeral::catalog;
use crate::numeral::profile::FormatSelector;
use crate::numeral::value::Numeral;

/// 改写模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalizeMode {
    /// 改写所有能解析的数字段
    #[default]
    Canonical,
    /// 只改写不含十百千萬等单位的数字段（门牌号 "一〇五" 之类）
    DigitsOnly,
    /// 原样返回
    Raw,
}

/// 单处改动（用于回滚）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralChange {
    /// 在原始文本中的字节范围
    pub original_span: Range<usize>,
    /// 在改写后文本中的字节范围
    pub normalized_span: Range<usize>,
    pub original_text: String,
    pub normalized_text: String,
}

/// 处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeResult {
    /// 改写后的文本
    pub text: String,
    /// 改动列表，按出现顺序
    pub changes: Vec<NumeralChange>,
}

lazy_static! {
    /// 由字表全部字符组成的字符类
    static ref RUN_PATTERN: Option<Regex> = {
        let class: String = catalog::all_glyphs()
            .map(|glyph| regex::escape(glyph.encode_utf8(&mut [0; 4])))
            .collect();
        Regex::new(&format!("[{}]+", class)).ok()
    };
}

/// 数字统一器
#[derive(Debug, Clone)]
pub struct NumeralNormalizer {
    mode: NormalizeMode,
    target: FormatSelector,
    /// 短于此字数的数字段不改写
    min_run_chars: usize,
}

impl NumeralNormalizer {
    /// 创建新的统一器
    pub fn new(mode: NormalizeMode, target: FormatSelector) -> Self {
        Self {
            mode,
            target,
            min_run_chars: 1,
        }
    }

    pub fn with_min_run_chars(mut self, min_run_chars: usize) -> Self {
        self.min_run_chars = min_run_chars;
        self
    }

    /// 处理文本
    pub fn process(&self, text: &str) -> NormalizeResult {
        if self.mode == NormalizeMode::Raw {
            return NormalizeResult {
                text: text.to_string(),
                changes: Vec::new(),
            };
        }

        let Some(pattern) = RUN_PATTERN.as_ref() else {
            tracing::error!("数字匹配表达式构建失败，跳过改写");
            return NormalizeResult {
                text: text.to_string(),
                changes: Vec::new(),
            };
        };

        let mut output = String::with_capacity(text.len());
        let mut changes = Vec::new();
        let mut cursor = 0;

        for run in pattern.find_iter(text) {
            output.push_str(&text[cursor..run.start()]);
            cursor = run.end();

            let original = run.as_str();
            match self.rewrite(original) {
                Some(normalized) if normalized != original => {
                    tracing::trace!("数字改写: '{}' → '{}'", original, normalized);
                    let start = output.len();
                    output.push_str(&normalized);
                    changes.push(NumeralChange {
                        original_span: run.range(),
                        normalized_span: start..output.len(),
                        original_text: original.to_string(),
                        normalized_text: normalized,
                    });
                }
                _ => output.push_str(original),
            }
        }
        output.push_str(&text[cursor..]);

        NormalizeResult {
            text: output,
            changes,
        }
    }

    /// 改写单个数字段，不改写时返回 `None`
    fn rewrite(&self, run: &str) -> Option<String> {
        if run.chars().count() < self.min_run_chars {
            return None;
        }

        if self.mode == NormalizeMode::DigitsOnly
            && run.chars().any(|glyph| catalog::resolve(glyph).is_multiplier())
        {
            return None;
        }

        Numeral::try_parse(run).map(|value| value.format(self.target))
    }

    pub fn set_mode(&mut self, mode: NormalizeMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> NormalizeMode {
        self.mode
    }

    pub fn set_target(&mut self, target: FormatSelector) {
        self.target = target;
    }

    pub fn target(&self) -> FormatSelector {
        self.target
    }

    pub fn min_run_chars(&self) -> usize {
        self.min_run_chars
    }

    /// 回滚处理结果，还原原始文本
    pub fn rollback(result: &NormalizeResult) -> String {
        let mut text = result.text.clone();

        // 从后往前替换，前面的范围不受影响
        for change in result.changes.iter().rev() {
            text.replace_range(change.normalized_span.clone(), &change.original_text);
        }

        text
    }
}

impl Default for NumeralNormalizer {
    fn default() -> Self {
        Self::new(NormalizeMode::Canonical, FormatSelector::HalfwidthWestern)
    }
}
