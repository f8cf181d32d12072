use crate::core::bytes::DEFAULT_BYTE_DECIMALS;
use crate::core::locale::Locale;
use crate::core::FormatSettings;
use crate::domain::model::TimeZoneSetting;
use crate::utils::error::{FormatError, Result};
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_CONFIG_BYTE_DECIMALS: i32 = 20;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub format: FormatConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    pub locale: Option<String>,
    pub timezone: Option<String>,
    pub byte_decimals: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormatError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DASHBOARD_LOCALE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormatError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(tag) = &self.format.locale {
            if Locale::lookup(tag).is_none() {
                let supported: Vec<&str> = Locale::builtin().iter().map(|l| l.tag).collect();
                return Err(FormatError::InvalidConfigValueError {
                    field: "format.locale".to_string(),
                    value: tag.clone(),
                    reason: format!("Unsupported locale. Supported: {}", supported.join(", ")),
                });
            }
        }

        if let Some(zone) = &self.format.timezone {
            zone.parse::<TimeZoneSetting>()
                .map_err(|_| FormatError::InvalidConfigValueError {
                    field: "format.timezone".to_string(),
                    value: zone.clone(),
                    reason: "Expected `local`, `utc` or an offset like `+02:00`".to_string(),
                })?;
        }

        if let Some(decimals) = self.format.byte_decimals {
            validate_range("format.byte_decimals", decimals, 0, MAX_CONFIG_BYTE_DECIMALS)?;
        }

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl FormatSettings for TomlConfig {
    fn locale_tag(&self) -> Option<&str> {
        self.format.locale.as_deref()
    }

    fn timezone(&self) -> Option<&str> {
        self.format.timezone.as_deref()
    }

    fn byte_decimals(&self) -> i32 {
        self.format.byte_decimals.unwrap_or(DEFAULT_BYTE_DECIMALS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[format]
locale = "de-DE"
timezone = "utc"
byte_decimals = 1

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.locale_tag(), Some("de-DE"));
        assert_eq!(config.timezone(), Some("utc"));
        assert_eq!(config.byte_decimals(), 1);
        assert_eq!(config.log_level(), Some("debug"));
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.locale_tag(), None);
        assert_eq!(config.timezone(), None);
        assert_eq!(config.byte_decimals(), DEFAULT_BYTE_DECIMALS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DASHFMT_TEST_LOCALE", "fr-FR");

        let toml_content = r#"
[format]
locale = "${DASHFMT_TEST_LOCALE}"
timezone = "${DASHFMT_TEST_UNSET_ZONE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.format.locale.as_deref(), Some("fr-FR"));
        assert_eq!(
            config.format.timezone.as_deref(),
            Some("${DASHFMT_TEST_UNSET_ZONE}")
        );

        std::env::remove_var("DASHFMT_TEST_LOCALE");
    }

    #[test]
    fn test_config_validation() {
        let bad_zone = TomlConfig::from_toml_str("[format]\ntimezone = \"Mars\"\n").unwrap();
        assert!(bad_zone.validate().is_err());

        let bad_decimals = TomlConfig::from_toml_str("[format]\nbyte_decimals = 42\n").unwrap();
        assert!(bad_decimals.validate().is_err());

        let bad_locale = TomlConfig::from_toml_str("[format]\nlocale = \"xx-YY\"\n").unwrap();
        assert!(bad_locale.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[format\nlocale = 1").unwrap_err();
        assert!(matches!(err, FormatError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[format]\nlocale = \"ja-JP\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.locale_tag(), Some("ja-JP"));
    }
}
