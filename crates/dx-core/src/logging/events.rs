//! Structured event vocabulary for logging.
//!
//! Every event carries the run id and the pipeline stage so JSONL output can
//! be correlated with the report of the same run.

use serde::{Deserialize, Serialize};

/// Processing stages of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Startup and settings resolution.
    Init,
    /// Reading and parsing the input file.
    Parse,
    /// Per-patient inference.
    Infer,
    /// Writing the report.
    Report,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Init => "init",
            Stage::Parse => "parse",
            Stage::Infer => "infer",
            Stage::Report => "report",
        };
        write!(f, "{}", s)
    }
}

/// Standard event names used in logging.
pub mod event_names {
    // Run lifecycle
    pub const RUN_STARTED: &str = "run.started";
    pub const RUN_FINISHED: &str = "run.finished";

    // Config
    pub const CONFIG_LOADED: &str = "config.loaded";

    // Parse stage
    pub const PARSE_FINISHED: &str = "parse.finished";

    // Infer stage
    pub const INFER_PATIENT_DONE: &str = "infer.patient_done";
    pub const INFER_MANY_UNKNOWNS: &str = "infer.many_unknowns";

    // Report stage
    pub const REPORT_WRITTEN: &str = "report.written";
}

/// Correlation data attached to every event of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub run_id: String,
}

impl LogContext {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_serialization_matches_display() {
        for stage in [Stage::Init, Stage::Parse, Stage::Infer, Stage::Report] {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage));
        }
    }

    #[test]
    fn event_names_are_stage_prefixed() {
        assert!(event_names::INFER_MANY_UNKNOWNS.starts_with("infer."));
        assert!(event_names::REPORT_WRITTEN.starts_with("report."));
    }
}
