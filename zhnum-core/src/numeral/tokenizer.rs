//! Tokenizer - 数字分词器
//!
//! 把输入文本逐字对应到字表 Token，遇到未知字符立即失败

use crate::error::ParseError;
use crate::numeral::catalog::{self, Token};

/// 字符出现记录
#[derive(Debug, Clone, Copy)]
pub struct Occurrence {
    /// 原始字符
    pub glyph: char,
    /// 在原始文本中的字符索引
    pub index: usize,
    /// 对应的 Token
    pub token: &'static Token,
}

impl Occurrence {
    /// 创建新的出现记录
    pub fn new(glyph: char, index: usize, token: &'static Token) -> Self {
        Self {
            glyph,
            index,
            token,
        }
    }
}

/// Tokenizer - 数字分词器
pub struct Tokenizer;

impl Tokenizer {
    /// 将文本分为 Occurrence 序列
    ///
    /// 规则：
    /// - 空串或全空白返回 `EmptyInput`
    /// - 第一个不在字表中的字符返回 `UnknownCharacter`（空白也算）
    pub fn tokenize(text: &str) -> Result<Vec<Occurrence>, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::empty_input());
        }

        let mut occurrences = Vec::with_capacity(text.len() / 3 + 1);

        for (index, glyph) in text.chars().enumerate() {
            let token = catalog::resolve(glyph);
            if token.is_unknown() {
                return Err(ParseError::unknown_character(glyph, index));
            }
            occurrences.push(Occurrence::new(glyph, index, token));
        }

        Ok(occurrences)
    }
}
