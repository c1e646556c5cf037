//! TOML manifest describing a full generation run

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::application::ApplicationError;
use crate::generation::ToolSpec;

/// Parsed generation manifest.
///
/// Each optional section drives one component; a section that is absent is
/// simply skipped when the whole manifest is run.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub toolchain: ToolchainConfig,
    pub schemas: Option<SchemasSection>,
    pub stubs: Option<StubsSection>,
    pub docs: Option<DocsSection>,
}

impl Manifest {
    pub async fn load(path: &Path) -> Result<Self, ApplicationError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            ApplicationError::Manifest(format!("reading `{}`: {e}", path.display()))
        })?;
        toml::from_str(&raw)
            .map_err(|e| ApplicationError::Manifest(format!("parsing `{}`: {e}", path.display())))
    }
}

/// External tool selection, overridable per manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolchainConfig {
    #[serde(default = "default_schema_compiler")]
    pub schema_compiler: ToolSpec,
    #[serde(default = "default_stub_generator")]
    pub stub_generator: ToolSpec,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            schema_compiler: default_schema_compiler(),
            stub_generator: default_stub_generator(),
        }
    }
}

fn default_schema_compiler() -> ToolSpec {
    ToolSpec::new("xjc")
}

fn default_stub_generator() -> ToolSpec {
    ToolSpec::new("wsdl2java")
}

/// `[schemas]` - schema compiler inputs
#[derive(Debug, Clone, Deserialize)]
pub struct SchemasSection {
    pub files: Vec<PathBuf>,
    pub binding: Option<PathBuf>,
    pub package: Option<String>,
    pub output_dir: PathBuf,
}

/// `[stubs]` - service stub generator inputs
#[derive(Debug, Clone, Deserialize)]
pub struct StubsSection {
    pub descriptions: Vec<PathBuf>,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub classpath: Vec<PathBuf>,
}

/// `[docs]` - documentation transform inputs
#[derive(Debug, Clone, Deserialize)]
pub struct DocsSection {
    pub input_dir: PathBuf,
    pub stylesheet: PathBuf,
    pub output_dir: PathBuf,
}
