//! Data Transfer Objects for application layer

use serde::Serialize;
use std::path::PathBuf;

use crate::application::ValidationError;

/// Request to compile a set of schema documents into generated sources
#[derive(Debug, Clone)]
pub struct CompileSchemasRequest {
    pub schema_files: Vec<PathBuf>,
    pub binding_file: Option<PathBuf>,
    pub package_name: Option<String>,
    pub output_dir: PathBuf,
}

impl CompileSchemasRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.schema_files.is_empty() {
            return Err(ValidationError::EmptySchemaSet);
        }

        for path in self.schema_files.iter().chain(self.binding_file.iter()) {
            if !path.is_file() {
                return Err(ValidationError::MissingInput(path.clone()));
            }
        }

        Ok(())
    }
}

/// Response from schema compilation
#[derive(Debug, Clone, Serialize)]
pub struct CompileSchemasResponse {
    pub schemas_compiled: usize,
    pub output_dir: PathBuf,
}

/// Request to generate service stubs from a set of service descriptions
#[derive(Debug, Clone)]
pub struct GenerateStubsRequest {
    pub descriptions: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub classpath: Vec<PathBuf>,
}

impl GenerateStubsRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for description in &self.descriptions {
            if !description.is_file() {
                return Err(ValidationError::MissingInput(description.clone()));
            }
            if description.file_name().is_none() {
                return Err(ValidationError::UnnamedDescription(description.clone()));
            }
        }
        Ok(())
    }
}

/// Response from stub generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateStubsResponse {
    pub jobs_dispatched: usize,
    pub output_dir: PathBuf,
}

/// Request to render schema documentation through a stylesheet
#[derive(Debug, Clone)]
pub struct RenderDocsRequest {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub stylesheet: PathBuf,
}

impl RenderDocsRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.input_dir.is_dir() {
            return Err(ValidationError::MissingInputDir(self.input_dir.clone()));
        }
        if !self.stylesheet.is_file() {
            return Err(ValidationError::MissingStylesheet(self.stylesheet.clone()));
        }
        Ok(())
    }
}

/// Response from documentation rendering
#[derive(Debug, Clone, Serialize)]
pub struct RenderDocsResponse {
    pub documents_rendered: usize,
    pub output_dir: PathBuf,
}
