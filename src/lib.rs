pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::TomlConfig;
pub use self::core::{
    bytes::format_bytes,
    currency::format_currency,
    duration::{format_duration, format_elapsed},
    formatter::Formatter,
    locale::Locale,
    number::{format_number, format_number_default},
    timestamp::{format_timestamp, parse_timestamp},
};
pub use domain::model::{FormatOutcome, FormatRequest, RenderSummary, TimeZoneSetting};
pub use domain::ports::{FormatSettings, TimestampCell, TimestampElement};
pub use utils::error::{FormatError, Result};
