//! Numeral - 数值类型
//!
//! 非负整数，上限为 10^32 - 1（穰之前一个完整的四位段）。

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{NumeralError, NumeralResult, ParseError};
use crate::numeral::decoder::Decoder;
use crate::numeral::encoder;
use crate::numeral::profile::FormatSelector;
use crate::numeral::tokenizer::Tokenizer;

/// 可表示的最大值：10^32 - 1
pub const MAX_VALUE: u128 = 99_999_999_999_999_999_999_999_999_999_999;

/// 精确的非负整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Numeral(u128);

impl Numeral {
    pub const ZERO: Numeral = Numeral(0);
    pub const MAX: Numeral = Numeral(MAX_VALUE);

    /// 创建数值，超过 [`MAX_VALUE`] 时返回 `OutOfRange`
    pub fn new(value: u128) -> NumeralResult<Self> {
        if value > MAX_VALUE {
            return Err(NumeralError::OutOfRange(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u128 {
        self.0
    }

    /// 解析中文数字
    ///
    /// # 返回
    /// - `Ok(Numeral)`: 解析成功
    /// - `Err(ParseError)`: 空输入、未知字符、单位顺序错误或段落溢出
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let result = Tokenizer::tokenize(text)
            .and_then(|occurrences| Decoder::decode(&occurrences));

        match result {
            Ok(value) => Ok(Self(value)),
            Err(e) => {
                tracing::debug!("数字解析失败: '{}' ({})", text, e);
                Err(e)
            }
        }
    }

    /// 解析中文数字，失败时返回 `None`
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// 按格式选择器输出文本
    pub fn format(self, selector: FormatSelector) -> String {
        match selector.profile() {
            Some(profile) => encoder::encode(self, profile),
            None => self.0.to_string(),
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Numeral {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Numeral {
                fn from(value: $t) -> Self {
                    Self(u128::from(value))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64);

impl TryFrom<u128> for Numeral {
    type Error = NumeralError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Numeral {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u128::try_from(value)
            .map(Self)
            .map_err(|_| NumeralError::OutOfRange(value.to_string()))
    }
}

impl TryFrom<i128> for Numeral {
    type Error = NumeralError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        let unsigned =
            u128::try_from(value).map_err(|_| NumeralError::OutOfRange(value.to_string()))?;
        Self::new(unsigned)
    }
}

impl TryFrom<f64> for Numeral {
    type Error = NumeralError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // MAX_VALUE 转成 f64 会舍入到 1e32
        if !value.is_finite() || value < 0.0 || value >= 1e32 {
            return Err(NumeralError::OutOfRange(value.to_string()));
        }
        if value.fract() != 0.0 {
            return Err(NumeralError::NotWholeNumber(value.to_string()));
        }
        Ok(Self(value as u128))
    }
}

impl From<Numeral> for u128 {
    fn from(numeral: Numeral) -> Self {
        numeral.0
    }
}

impl Serialize for Numeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct NumeralVisitor;

impl<'de> Visitor<'de> for NumeralVisitor {
    type Value = Numeral;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a numeral string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Numeral, E> {
        Ok(Numeral::from(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Numeral, E> {
        Numeral::new(value).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Numeral, E> {
        Numeral::try_from(value).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Numeral, E> {
        Numeral::try_from(value).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Numeral, E> {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            let value = text
                .parse::<u128>()
                .map_err(|_| E::custom(NumeralError::OutOfRange(text.to_string())))?;
            return Numeral::new(value).map_err(E::custom);
        }
        Numeral::parse(text).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Numeral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumeralVisitor)
    }
}

/// 解析中文数字
pub fn parse(text: &str) -> Result<Numeral, ParseError> {
    Numeral::parse(text)
}

/// 解析中文数字，失败时返回 `None`
pub fn try_parse(text: &str) -> Option<Numeral> {
    Numeral::try_parse(text)
}

/// 按格式选择器输出文本
pub fn format(value: Numeral, selector: FormatSelector) -> String {
    value.format(selector)
}
