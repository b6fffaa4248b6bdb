//! 配置模块
//!
//! 从 $ZHNUM_CONFIG 或 ~/.config/zhnum/config.toml 加载

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NumeralError, NumeralResult};
use crate::numeral::{FormatSelector, NormalizeMode, Numeral, NumeralNormalizer};

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "ZHNUM_CONFIG";

/// 文本内数字统一配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub mode: NormalizeMode,
    pub target: FormatSelector,
    /// 短于此字数的数字段不改写
    pub min_run_chars: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            mode: NormalizeMode::Canonical,
            target: FormatSelector::HalfwidthWestern,
            min_run_chars: 1,
        }
    }
}

/// 完整配置
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumeralConfig {
    /// 默认输出格式
    pub default_style: FormatSelector,
    pub normalizer: NormalizerConfig,
}

impl NumeralConfig {
    /// 加载配置文件，文件不存在时使用默认配置
    pub fn load() -> NumeralResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 从指定路径加载
    pub fn load_from(path: &Path) -> NumeralResult<Self> {
        if !path.exists() {
            return Err(NumeralError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| NumeralError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("加载配置成功: {:?}", path);
        tracing::debug!(
            "默认格式: {}, 统一模式: {:?}, 目标格式: {}",
            config.default_style,
            config.normalizer.mode,
            config.normalizer.target
        );
        Ok(config)
    }

    /// 从 TOML 文本解析
    pub fn from_toml_str(text: &str) -> NumeralResult<Self> {
        toml::from_str(text).map_err(|e| NumeralError::ConfigParse {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// 保存到默认路径
    pub fn save(&self) -> NumeralResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> NumeralResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| NumeralError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 按默认格式输出数值
    pub fn format(&self, value: Numeral) -> String {
        value.format(self.default_style)
    }

    /// 按配置创建数字统一器
    pub fn normalizer(&self) -> NumeralNormalizer {
        NumeralNormalizer::new(self.normalizer.mode, self.normalizer.target)
            .with_min_run_chars(self.normalizer.min_run_chars)
    }

    /// 获取配置文件路径
    pub fn config_path() -> NumeralResult<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| NumeralError::ConfigNotFound("无法获取配置目录".to_string()))?;

        Ok(config_dir.join("zhnum").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NumeralConfig::default();

        assert_eq!(config.default_style, FormatSelector::TraditionalUppercase);
        assert_eq!(config.normalizer.mode, NormalizeMode::Canonical);
        assert_eq!(config.normalizer.target, FormatSelector::HalfwidthWestern);
        assert_eq!(config.normalizer.min_run_chars, 1);
    }

    #[test]
    fn test_from_toml_str() {
        let config = NumeralConfig::from_toml_str(
            r#"
default_style = "SimplifiedLowercase"

[normalizer]
mode = "DigitsOnly"
target = "FullwidthWestern"
"#,
        )
        .unwrap();

        assert_eq!(config.default_style, FormatSelector::SimplifiedLowercase);
        assert_eq!(config.normalizer.mode, NormalizeMode::DigitsOnly);
        assert_eq!(config.normalizer.target, FormatSelector::FullwidthWestern);
        // 未写出的字段取默认值
        assert_eq!(config.normalizer.min_run_chars, 1);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(NumeralConfig::from_toml_str("").unwrap(), NumeralConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = NumeralConfig::from_toml_str("default_style = \"Klingon\"").unwrap_err();
        assert!(matches!(err, NumeralError::ConfigParse { .. }));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = NumeralConfig::default();
        config.default_style = FormatSelector::TraditionalLowercase;
        config.normalizer.min_run_chars = 3;
        config.save_to(&path).unwrap();

        let loaded = NumeralConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = NumeralConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, NumeralError::ConfigNotFound(_)));
    }

    #[test]
    fn test_format_uses_default_style() {
        let value = Numeral::from(1003u32);
        assert_eq!(NumeralConfig::default().format(value), "壹仟零參");

        let config =
            NumeralConfig::from_toml_str(r#"default_style = "SimplifiedLowercase""#).unwrap();
        assert_eq!(config.format(value), "一千〇三");

        let config = NumeralConfig::from_toml_str(r#"default_style = "PlainDecimal""#).unwrap();
        assert_eq!(config.format(value), "1003");
    }

    #[test]
    fn test_normalizer_from_config() {
        let config = NumeralConfig::from_toml_str(
            r#"
[normalizer]
target = "TraditionalLowercase"
min_run_chars = 2
"#,
        )
        .unwrap();

        let normalizer = config.normalizer();
        assert_eq!(normalizer.target(), FormatSelector::TraditionalLowercase);
        assert_eq!(normalizer.process("5號18樓").text, "5號十八樓");
    }
}
