use std::fmt;

use thiserror::Error;

/// 解析错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// 输入为空或只有空白
    EmptyInput,
    /// 出现字表以外的字符
    UnknownCharacter,
    /// 单位顺序错误（例如 "一百千"）
    InvalidUnitPosition,
    /// 单位前的数字位数超出段落容量（例如 "一一一千"）
    SegmentOverflow,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EmptyInput => "empty input",
            Self::UnknownCharacter => "unknown character",
            Self::InvalidUnitPosition => "invalid unit position",
            Self::SegmentOverflow => "segment overflow",
        };
        f.write_str(name)
    }
}

/// 中文数字解析错误
///
/// 除 `EmptyInput` 外都带有出错的字符及其字符索引。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.describe())]
pub struct ParseError {
    kind: ParseErrorKind,
    glyph: Option<char>,
    index: Option<usize>,
}

impl ParseError {
    pub fn empty_input() -> Self {
        Self {
            kind: ParseErrorKind::EmptyInput,
            glyph: None,
            index: None,
        }
    }

    pub fn unknown_character(glyph: char, index: usize) -> Self {
        Self::at(ParseErrorKind::UnknownCharacter, glyph, index)
    }

    pub fn invalid_unit_position(glyph: char, index: usize) -> Self {
        Self::at(ParseErrorKind::InvalidUnitPosition, glyph, index)
    }

    pub fn segment_overflow(glyph: char, index: usize) -> Self {
        Self::at(ParseErrorKind::SegmentOverflow, glyph, index)
    }

    fn at(kind: ParseErrorKind, glyph: char, index: usize) -> Self {
        Self {
            kind,
            glyph: Some(glyph),
            index: Some(index),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// 出错的字符
    pub fn glyph(&self) -> Option<char> {
        self.glyph
    }

    /// 出错字符在输入中的字符索引（不是字节偏移）
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    fn describe(&self) -> String {
        match (self.glyph, self.index) {
            (Some(glyph), Some(index)) => format!("{}: '{}' at index {}", self.kind, glyph, index),
            _ => format!("{}", self.kind),
        }
    }
}

#[derive(Error, Debug)]
pub enum NumeralError {
    // 解析错误
    #[error("Numeral parse error: {0}")]
    Parse(#[from] ParseError),

    // 数值错误
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Value must be a whole number: {0}")]
    NotWholeNumber(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_accessors() {
        let err = ParseError::segment_overflow('千', 3);
        assert_eq!(err.kind(), ParseErrorKind::SegmentOverflow);
        assert_eq!(err.glyph(), Some('千'));
        assert_eq!(err.index(), Some(3));

        let empty = ParseError::empty_input();
        assert_eq!(empty.kind(), ParseErrorKind::EmptyInput);
        assert_eq!(empty.glyph(), None);
        assert_eq!(empty.index(), None);
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::unknown_character('其', 0).to_string(),
            "unknown character: '其' at index 0"
        );
        assert_eq!(ParseError::empty_input().to_string(), "empty input");
    }

    #[test]
    fn test_numeral_error_from_parse_error() {
        let err: NumeralError = ParseError::invalid_unit_position('千', 2).into();
        assert!(matches!(
            err,
            NumeralError::Parse(ref e) if e.kind() == ParseErrorKind::InvalidUnitPosition
        ));
        assert_eq!(
            err.to_string(),
            "Numeral parse error: invalid unit position: '千' at index 2"
        );
    }
}
