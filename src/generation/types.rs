//! Core types for the generation domain

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::generation::GenerationError;

/// Request for one schema compiler run.
///
/// Schema file order is preserved exactly as given; the external compiler
/// may resolve cross-schema references positionally.
#[derive(Debug, Clone)]
pub struct CompileRequest {
    pub schema_files: Vec<PathBuf>,
    pub binding_file: Option<PathBuf>,
    pub package_name: Option<String>,
    pub output_dir: PathBuf,
}

impl CompileRequest {
    /// Validate the request preconditions: a non-empty schema set whose
    /// entries (and binding file, if any) all resolve to readable files.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.schema_files.is_empty() {
            return Err(GenerationError::validation(
                "at least one schema file is required",
            ));
        }

        for path in self.schema_files.iter().chain(self.binding_file.iter()) {
            if !path.is_file() {
                return Err(GenerationError::validation(format!(
                    "input `{}` is not a readable file",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Build the compiler argument list. Schema files keep their order.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-d".to_string(),
            self.output_dir.display().to_string(),
            "-extension".to_string(),
            "-no-header".to_string(),
        ];

        if let Some(package) = &self.package_name {
            args.push("-p".to_string());
            args.push(package.clone());
        }

        if let Some(binding) = &self.binding_file {
            args.push("-b".to_string());
            args.push(binding.display().to_string());
        }

        args.extend(self.schema_files.iter().map(|p| p.display().to_string()));
        args
    }
}

/// A batch of service descriptions sharing one output directory and one
/// tool classpath. Jobs derived from a batch are independent and each
/// writes a disjoint artifact set under the output directory.
#[derive(Debug, Clone)]
pub struct StubBatch {
    pub descriptions: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub classpath: Classpath,
}

impl StubBatch {
    /// Derive one [`StubJob`] per service description.
    pub fn jobs(&self) -> Result<Vec<StubJob>, GenerationError> {
        self.descriptions
            .iter()
            .map(|description| StubJob::for_description(description, &self.output_dir))
            .collect()
    }
}

/// One stub generation job, derived from a single service description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubJob {
    /// Absolute path of the service description handed to the tool.
    pub description: PathBuf,
    /// Classpath-relative location hint baked into the generated stubs so
    /// they can locate their description at runtime without an absolute
    /// path.
    pub wsdl_location: String,
    pub output_dir: PathBuf,
}

impl StubJob {
    pub fn for_description(description: &Path, output_dir: &Path) -> Result<Self, GenerationError> {
        let name = description
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                GenerationError::validation(format!(
                    "service description `{}` has no file name",
                    description.display()
                ))
            })?
            .to_string();

        Ok(Self {
            description: std::path::absolute(description)?,
            wsdl_location: format!("classpath:wsdl/{name}"),
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Argument list for the stub generator child process.
    pub fn args(&self) -> Vec<String> {
        vec![
            "-quiet".to_string(),
            "-d".to_string(),
            self.output_dir.display().to_string(),
            "-wsdlLocation".to_string(),
            self.wsdl_location.clone(),
            self.description.display().to_string(),
        ]
    }
}

/// A transform pass over the schema documents of one directory.
#[derive(Debug, Clone)]
pub struct TransformJob {
    /// Scanned non-recursively for source documents.
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub stylesheet: PathBuf,
}

/// Selects an external generator executable plus its fixed leading
/// arguments, so a JVM launcher (`java` + main class) or a test fake can
/// stand in for the plain tool wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolSpec {
    pub program: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Short tool name used in logs and error messages.
    pub fn display_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }
}

/// Library locations handed to JVM-style tools as a search path.
#[derive(Debug, Clone, Default)]
pub struct Classpath(Vec<PathBuf>);

impl Classpath {
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join the entries with the platform path-list separator.
    pub fn to_search_path(&self) -> String {
        let separator = if cfg!(windows) { ";" } else { ":" };
        self.0
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl FromIterator<PathBuf> for Classpath {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
