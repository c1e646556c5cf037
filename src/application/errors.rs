//! Application layer error types

use std::path::PathBuf;
use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Generation error: {0}")]
    Generation(#[from] crate::generation::GenerationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors for requests
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("at least one schema file is required")]
    EmptySchemaSet,

    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("input directory not found: {}", .0.display())]
    MissingInputDir(PathBuf),

    #[error("stylesheet not found: {}", .0.display())]
    MissingStylesheet(PathBuf),

    #[error("service description has no file name: {}", .0.display())]
    UnnamedDescription(PathBuf),
}
