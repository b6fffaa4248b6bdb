//! zhnum Core Engine
//!
//! 中文数字解析与格式化核心引擎

#![warn(rust_2018_idioms)]

pub mod numeral;
pub mod config;
pub mod error;

// Re-export key types
pub use error::{NumeralError, NumeralResult, ParseError, ParseErrorKind};
pub use numeral::{
    format, parse, profile, try_parse, FormatSelector, FormatterProfile, NormalizeMode,
    NormalizeResult, Numeral, NumeralChange, NumeralNormalizer, ProfileName,
};
pub use config::NumeralConfig;

/// 初始化日志系统
///
/// 默认构建: 不启用日志
/// 调试模式 (--features debug-logs): 按 ZHNUM_LOG 过滤，默认 warn
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("ZHNUM_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 已经初始化过时 try_init() 返回错误，忽略即可
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
