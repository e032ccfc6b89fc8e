//! Tracing/logging initialization.
//!
//! The filter comes from `RUST_LOG` (default `info`). The output format comes
//! from `STOCKKEEP_LOG_FORMAT`: `json` (default) or `text`.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "STOCKKEEP_LOG_FORMAT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable `timestamp LEVEL message fields` lines.
    Text,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log format `{0}` (expected `json` or `text`)")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    /// Unrecognised format value that was replaced by the default; reported once logging is up.
    pub rejected_format: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_filter: "info".to_string(),
            rejected_format: None,
        }
    }
}

impl LogConfig {
    /// Read the format from [`LOG_FORMAT_ENV`]; unknown values fall back to JSON.
    pub fn from_env() -> Self {
        Self::with_format(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    /// Build from a raw format value (`None` when unset).
    pub fn with_format(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<LogFormat>) {
            None => Self::default(),
            Some(Ok(format)) => Self {
                format,
                ..Self::default()
            },
            Some(Err(_)) => Self {
                rejected_format: raw.map(str::to_string),
                ..Self::default()
            },
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let _ = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
    };

    if let Some(raw) = &config.rejected_format {
        ::tracing::warn!(
            "{LOG_FORMAT_ENV}=`{raw}` is not a known log format; using {:?}",
            config.format
        );
    }
}
