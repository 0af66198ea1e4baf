//! Diagnostic Inference Core Library
//!
//! This library provides the core functionality for naive-Bayes diagnosis:
//! - Disease and patient data model
//! - Posterior, bound and best-test inference
//! - Input record parsing and report rendering
//! - Exit codes, logging and the batch driver used by the `dx` binary
//!
//! The binary entry point is in `main.rs`.

pub mod cli;
pub mod exit_codes;
pub mod inference;
pub mod input;
pub mod logging;
pub mod model;
pub mod output;
pub mod paths;
pub mod query;
pub mod runner;

pub use inference::{
    best_tests, enumerate_completions, posterior, posterior_bounds, BestTests, InferenceError,
    PosteriorBounds, TestCandidate,
};
pub use model::{Disease, ModelError, Patient, SymptomVector};
