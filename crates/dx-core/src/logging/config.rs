//! Logging configuration.
//!
//! Precedence, lowest to highest:
//! - Built-in defaults (`info`, human)
//! - The `[log]` table of the settings file
//! - Environment variables (DX_LOG, then RUST_LOG; DX_LOG_FORMAT)
//! - CLI flags (-v/-q, --log-format)

use dx_config::LogSettings;
pub use dx_config::{LogFormat, LogLevel};
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding the log level.
pub const ENV_LOG: &str = "DX_LOG";
/// Environment variable holding the log format.
pub const ENV_LOG_FORMAT: &str = "DX_LOG_FORMAT";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Output format.
    pub format: LogFormat,
    /// Minimum log level.
    pub level: LogLevel,
    /// Whether to include timestamps in human output.
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            format: LogFormat::Human,
            level: LogLevel::Info,
            timestamps: true,
        }
    }
}

impl LogConfig {
    /// Create config from settings, the process environment and CLI overrides.
    pub fn from_env(
        settings: &LogSettings,
        cli_level: Option<LogLevel>,
        cli_format: Option<LogFormat>,
    ) -> Self {
        Self::from_sources(settings, |key| std::env::var(key).ok(), cli_level, cli_format)
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
    pub fn from_sources<F>(
        settings: &LogSettings,
        env: F,
        cli_level: Option<LogLevel>,
        cli_format: Option<LogFormat>,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LogConfig::default();
        if let Some(level) = settings.level {
            config.level = level;
        }
        if let Some(format) = settings.format {
            config.format = format;
        }
        if let Some(timestamps) = settings.timestamps {
            config.timestamps = timestamps;
        }

        // DX_LOG takes precedence over RUST_LOG
        if let Some(val) = env(ENV_LOG) {
            if let Ok(level) = val.parse::<LogLevel>() {
                config.level = level;
            }
        } else if let Some(val) = env("RUST_LOG") {
            if let Some(level) = level_from_rust_log(&val) {
                config.level = level;
            }
        }

        if let Some(val) = env(ENV_LOG_FORMAT) {
            if let Ok(format) = val.parse::<LogFormat>() {
                config.format = format;
            }
        }

        if let Some(level) = cli_level {
            config.level = level;
        }
        if let Some(format) = cli_format {
            config.format = format;
        }

        config
    }
}

/// Level implied by a CLI verbosity count and quiet flag.
///
/// `-q` wins over any number of `-v`.
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> Option<LogLevel> {
    match (quiet, verbose) {
        (true, _) => Some(LogLevel::Error),
        (false, 0) => None,
        (false, 1) => Some(LogLevel::Debug),
        (false, _) => Some(LogLevel::Trace),
    }
}

/// Coarse level from a RUST_LOG directive string, most verbose mention wins.
fn level_from_rust_log(directives: &str) -> Option<LogLevel> {
    let lowered = directives.to_lowercase();
    [
        ("trace", LogLevel::Trace),
        ("debug", LogLevel::Debug),
        ("info", LogLevel::Info),
        ("warn", LogLevel::Warn),
        ("error", LogLevel::Error),
        ("off", LogLevel::Off),
    ]
    .into_iter()
    .find(|(name, _)| lowered.contains(name))
    .map(|(_, level)| level)
}

/// Map a [`LogLevel`] onto a subscriber filter.
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
