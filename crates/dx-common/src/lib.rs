//! Diagnostic inference common types and errors.
//!
//! This crate provides foundational types shared across the `dx-*` crates:
//! - The three-valued symptom domain
//! - The unified error type with stable codes
//! - Report output formats

pub mod error;
pub mod output;
pub mod symptom;

pub use error::{Error, ErrorCategory, Result, StructuredError};
pub use output::OutputFormat;
pub use symptom::{Symptom, SymptomParseError};
