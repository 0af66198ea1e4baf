//! Exit codes for the `dx` CLI.
//!
//! Exit code ranges:
//! - 0: Success
//! - 10-19: User errors (fixable by changing arguments, settings or input)
//! - 20-29: Runtime errors (degenerate models, I/O failures)

use dx_common::{Error, ErrorCategory};

/// Exit codes for `dx` operations.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: report written (or input checked)
    Clean = 0,

    // ========================================================================
    // User Errors (10-19)
    // ========================================================================
    /// Invalid arguments or input file name
    ArgsError = 10,

    /// Settings file missing, malformed or invalid
    ConfigError = 11,

    /// Malformed input record or symptom value
    InputError = 12,

    /// Disease/patient contract violation
    ModelError = 13,

    // ========================================================================
    // Runtime Errors (20-29)
    // ========================================================================
    /// Posterior could not be computed
    InferenceError = 20,

    /// I/O or serialization failure
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Check if this exit code is a user error (codes 10-19).
    pub fn is_user_error(self) -> bool {
        let code = self as i32;
        (10..20).contains(&code)
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::InputError => "ERR_INPUT",
            ExitCode::ModelError => "ERR_MODEL",
            ExitCode::InferenceError => "ERR_INFERENCE",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err.category() {
            ErrorCategory::Args => ExitCode::ArgsError,
            ErrorCategory::Config => ExitCode::ConfigError,
            ErrorCategory::Input => ExitCode::InputError,
            ErrorCategory::Model => ExitCode::ModelError,
            ErrorCategory::Inference => ExitCode::InferenceError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
