//! 中文数字模块
//!
//! 中文数字与整数之间的双向转换，以及文本内数字的统一改写

pub mod catalog;
pub mod tokenizer;
pub mod decoder;
pub mod value;
pub mod profile;
pub mod encoder;
pub mod normalizer;

// 导出核心类型
pub use catalog::{GroupUnit, TinyUnit, Token, TokenKind};
pub use tokenizer::{Occurrence, Tokenizer};
pub use decoder::Decoder;
pub use value::{format, parse, try_parse, Numeral, MAX_VALUE};
pub use profile::{profile, CompositionMode, FormatSelector, FormatterProfile, ProfileName};
pub use encoder::encode;
pub use normalizer::{NormalizeMode, NormalizeResult, NumeralChange, NumeralNormalizer};
