//! Error types for diagnostic inference.
//!
//! This module provides structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Remediation suggestions for humans
//!
//! # Human-Facing Output
//!
//! ```text
//! ✗ Invalid Input
//!   Reason: invalid input at line 7: expected 3 likelihoods, found 2
//!   Fix: Check the input record layout: counts, disease blocks, then patient lines.
//! ```
//!
//! # Machine-Facing Output
//!
//! ```json
//! {
//!   "code": 20,
//!   "category": "input",
//!   "message": "invalid input at line 7: expected 3 likelihoods, found 2",
//!   "context": { "line": 7 }
//! }
//! ```

use crate::symptom::SymptomParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type alias for diagnostic inference operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Command-line argument errors.
    Args,
    /// Settings file errors.
    Config,
    /// Malformed input records and out-of-domain symptom values.
    Input,
    /// Disease/patient construction contract violations.
    Model,
    /// Posterior computation errors.
    Inference,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Args => write!(f, "args"),
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Model => write!(f, "model"),
            ErrorCategory::Inference => write!(f, "inference"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type surfaced by the `dx` binary.
#[derive(Error, Debug)]
pub enum Error {
    // Argument errors (1-9)
    #[error("invalid arguments: {0}")]
    Args(String),

    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    // Input errors (20-29)
    #[error("invalid input at line {line}: {message}")]
    Input { line: usize, message: String },

    #[error("invalid symptom value at line {line}: {source}")]
    DomainValue {
        line: usize,
        #[source]
        source: SymptomParseError,
    },

    // Model errors (30-39)
    #[error("invalid model: {0}")]
    Model(String),

    // Inference errors (40-49)
    #[error("inference failed: {0}")]
    Inference(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 1-9: Argument errors
    /// - 10-19: Configuration errors
    /// - 20-29: Input errors
    /// - 30-39: Model errors
    /// - 40-49: Inference errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Args(_) => 1,
            Error::Config(_) => 10,
            Error::Input { .. } => 20,
            Error::DomainValue { .. } => 21,
            Error::Model(_) => 30,
            Error::Inference(_) => 40,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Args(_) => ErrorCategory::Args,
            Error::Config(_) => ErrorCategory::Config,
            Error::Input { .. } | Error::DomainValue { .. } => ErrorCategory::Input,
            Error::Model(_) => ErrorCategory::Model,
            Error::Inference(_) => ErrorCategory::Inference,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Args(_) => "Run 'dx --help' for usage. The input file must be named '*.txt'.",
            Error::Config(_) => {
                "Check the settings file syntax, or unset DX_CONFIG to fall back to defaults."
            }
            Error::Input { .. } => {
                "Check the input record layout: counts, disease blocks, then patient lines."
            }
            Error::DomainValue { .. } => "Symptom vectors may only contain 'T', 'F' and 'U'.",
            Error::Model(_) => {
                "Probabilities must lie in [0, 1] and every list must match the findings count."
            }
            Error::Inference(_) => {
                "The evidence has zero probability under both hypotheses; review the likelihoods."
            }
            Error::Io(_) => "Check that the input exists and the output directory is writable.",
            Error::Json(_) => "Internal serialization failure; please report it.",
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Args(_) => "Invalid Arguments",
            Error::Config(_) => "Configuration Error",
            Error::Input { .. } => "Invalid Input",
            Error::DomainValue { .. } => "Invalid Symptom Value",
            Error::Model(_) => "Invalid Model",
            Error::Inference(_) => "Inference Error",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Error",
        }
    }

    /// Formats the error as a headline/reason/fix block.
    pub fn human_report(&self) -> String {
        format!(
            "✗ {}\n  Reason: {}\n  Fix: {}",
            self.headline(),
            self,
            self.remediation()
        )
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Additional structured context (e.g., line number).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = BTreeMap::new();

        match err {
            Error::Input { line, .. } => {
                context.insert("line".to_string(), serde_json::json!(line));
            }
            Error::DomainValue { line, source } => {
                context.insert("line".to_string(), serde_json::json!(line));
                context.insert("value".to_string(), serde_json::json!(source.value));
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            context,
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}
