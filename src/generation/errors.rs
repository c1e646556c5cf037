//! Error types for the generation domain

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving the external generators
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The child process for schema or stub generation exited abnormally
    /// or could not be launched at all.
    #[error("External tool `{tool}` failed: {reason}")]
    ExternalToolFailure { tool: String, reason: String },

    /// Stylesheet application failed for one input document. Outputs
    /// already written for earlier documents in the same batch remain.
    #[error("Transform of `{}` failed: {reason}", .input.display())]
    TransformFailure { input: PathBuf, reason: String },

    /// One or more stub generation jobs in a batch failed. Every failed
    /// job is listed with its service description.
    #[error("{} of {total} stub generation job(s) failed: {}", .failures.len(), describe_failures(.failures))]
    StubBatch {
        failures: Vec<StubFailure>,
        total: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerationError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new external tool failure
    pub fn external_tool<T: Into<String>, R: Into<String>>(tool: T, reason: R) -> Self {
        Self::ExternalToolFailure {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a new transform failure for the given input document
    pub fn transform<R: Into<String>>(input: impl Into<PathBuf>, reason: R) -> Self {
        Self::TransformFailure {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// A single failed stub generation job within a batch.
#[derive(Debug)]
pub struct StubFailure {
    /// Service description the failed job was generated from.
    pub description: PathBuf,
    pub reason: String,
}

fn describe_failures(failures: &[StubFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{} ({})", f.description.display(), f.reason))
        .collect::<Vec<_>>()
        .join(", ")
}
