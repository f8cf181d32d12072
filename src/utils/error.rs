use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid argument `{argument}` ({value}): {reason}")]
    InvalidArgument {
        argument: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for `{field}` ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FormatError {
    pub fn invalid_argument(
        argument: &str,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        FormatError::InvalidArgument {
            argument: argument.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FormatError::InvalidArgument { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FormatError::InvalidArgument {
                argument, reason, ..
            } => format!("Cannot format `{}`: {}", argument, reason),
            FormatError::IoError(e) => format!("Could not read or write a file: {}", e),
            FormatError::SerializationError(e) => format!("Malformed JSON input: {}", e),
            FormatError::ConfigError { message } => format!("Configuration problem: {}", message),
            FormatError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field `{}` is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormatError::InvalidArgument { .. } => {
                "Pass a finite number (non-negative for bytes and durations) or a valid ISO-8601/epoch timestamp"
            }
            FormatError::IoError(_) => "Check that the file exists and is readable",
            FormatError::SerializationError(_) => {
                "Batch input must be a JSON array of objects with a `kind` field"
            }
            FormatError::ConfigError { .. } => "Check the TOML syntax of the configuration file",
            FormatError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the configuration file or on the command line"
            }
        }
    }

    /// 依錯誤種類決定 CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            FormatError::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
