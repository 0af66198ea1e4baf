//! Report output formats.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Three dict-literal lines per patient (the classic batch report)
    #[default]
    Legacy,

    /// One structured JSON document for the whole batch
    Json,

    /// Human-readable Markdown tables
    Md,
}

impl OutputFormat {
    /// File extension used when the output path is derived.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Legacy => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Md => "md",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Legacy => write!(f, "legacy"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Md => write!(f, "md"),
        }
    }
}
