//! Diagnostic inference settings loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for `settings.toml`
//! - Settings resolution (CLI → env → XDG → defaults)
//! - Semantic validation

pub mod resolve;
pub mod settings;
pub mod validate;

pub use resolve::{resolve_settings, resolve_settings_from, ResolvedSettings, SettingsSource};
pub use settings::{LimitSettings, LogFormat, LogLevel, LogSettings, OutputSettings, Settings};
pub use validate::{validate_settings, ConfigError, ValidationError, ValidationResult};

/// Default suffix appended to the input stem when naming the report.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_inference";
