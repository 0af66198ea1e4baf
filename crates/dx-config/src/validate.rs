//! Settings errors and semantic validation.
//!
//! Syntax and shape are checked by serde; this module checks that the values
//! make sense together (e.g. the report suffix cannot escape the output
//! directory).

use crate::settings::Settings;
use std::path::PathBuf;
use thiserror::Error;

/// Largest unknown count for which `2^unknowns` still fits in a `u64`.
pub const MAX_WARN_UNKNOWNS: u32 = 63;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Semantic validation failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Settings file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML{}: {source}", describe_path(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    #[error("Semantic validation failed: {0}")]
    Validation(#[from] ValidationError),
}

fn describe_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}

impl From<ConfigError> for dx_common::Error {
    fn from(err: ConfigError) -> Self {
        dx_common::Error::Config(err.to_string())
    }
}

/// Validate settings semantically.
pub fn validate_settings(settings: &Settings) -> ValidationResult<()> {
    let suffix = &settings.output.suffix;
    if suffix.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "output.suffix".to_string(),
            message: "Must not be empty".to_string(),
        });
    }
    if suffix.contains(['/', '\\']) || suffix.contains("..") {
        return Err(ValidationError::InvalidValue {
            field: "output.suffix".to_string(),
            message: format!("Must not contain path separators, got {:?}", suffix),
        });
    }

    if let Some(dir) = &settings.output.directory {
        if dir.as_os_str().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "output.directory".to_string(),
                message: "Must not be empty when set".to_string(),
            });
        }
    }

    if settings.limits.warn_unknowns_above > MAX_WARN_UNKNOWNS {
        return Err(ValidationError::InvalidValue {
            field: "limits.warn_unknowns_above".to_string(),
            message: format!(
                "Must be at most {}, got {}",
                MAX_WARN_UNKNOWNS, settings.limits.warn_unknowns_above
            ),
        });
    }

    Ok(())
}
