pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::FormatRequest;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use self::toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "dashfmt")]
#[command(about = "Format bytes, durations, currency, numbers and timestamps for the node dashboard")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Locale tag (e.g. de-DE); detected from LC_ALL/LC_NUMERIC/LANG when omitted
    #[arg(long)]
    pub locale: Option<String>,

    /// Time zone for timestamps: local, utc or an offset such as +02:00
    #[arg(long, allow_hyphen_values = true)]
    pub timezone: Option<String>,

    /// Default fraction digits for byte sizes
    #[arg(long, allow_negative_numbers = true)]
    pub byte_decimals: Option<i32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format a byte count (e.g. 1536 -> "1.5 KB")
    Bytes {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Fraction digits; negative values act as 0
        #[arg(short, long, allow_negative_numbers = true)]
        decimals: Option<i32>,
    },
    /// Format seconds as "{h}h {m}m {s}s"
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// Format a dollar amount with K/M/B scaling
    Currency {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Format a number with locale digit grouping
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Format an ISO-8601 or epoch timestamp
    Timestamp {
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// Format a JSON array of requests read from a file or stdin
    Batch {
        /// Input file, or '-' for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        #[arg(long)]
        pretty: bool,
    },
}

#[cfg(feature = "cli")]
impl Command {
    /// Single-value commands as a request; `None` for `batch`.
    pub fn to_request(&self) -> Option<FormatRequest> {
        match self {
            Command::Bytes { value, decimals } => Some(FormatRequest::Bytes {
                value: *value,
                decimals: *decimals,
            }),
            Command::Duration { seconds } => Some(FormatRequest::Duration { value: *seconds }),
            Command::Currency { value } => Some(FormatRequest::Currency { value: *value }),
            Command::Number { value } => Some(FormatRequest::Number { value: *value }),
            Command::Timestamp { raw } => Some(FormatRequest::Timestamp { value: raw.clone() }),
            Command::Batch { .. } => None,
        }
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋設定檔中的值
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(locale) = &self.locale {
            config.format.locale = Some(locale.clone());
            tracing::debug!("Locale overridden to: {}", locale);
        }
        if let Some(zone) = &self.timezone {
            config.format.timezone = Some(zone.clone());
            tracing::debug!("Timezone overridden to: {}", zone);
        }
        if let Some(decimals) = self.byte_decimals {
            config.format.byte_decimals = Some(decimals);
            tracing::debug!("Byte decimals overridden to: {}", decimals);
        }
        if self.log_json {
            config.logging.get_or_insert_with(Default::default).json = Some(true);
        }
    }
}
