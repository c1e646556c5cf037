//! schemaforge CLI entrypoint
//! Parses command-line arguments and dispatches to the generation use cases.
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use schemaforge::application::{
    CompileSchemas, CompileSchemasRequest, GenerateStubs, GenerateStubsRequest, Manifest,
    RenderDocs, RenderDocsRequest,
};
use schemaforge::generation::{DocTransformer, SchemaCompiler, ServiceStubGenerator, ToolSpec};
use schemaforge::infrastructure::{TeraTransformEngine, TokioProcessRunner};

#[derive(Parser)]
#[command(name = "schemaforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Compile XML schemas into generated source classes
    Schemas {
        /// Schema file, repeatable; compiled in the given order
        #[arg(long = "schema", required = true)]
        schemas: Vec<PathBuf>,
        /// Binding customization file for the compiler
        #[arg(long)]
        binding: Option<PathBuf>,
        /// Package name override for generated classes
        #[arg(long)]
        package: Option<String>,
        /// Output directory for generated sources
        #[arg(long)]
        output_dir: PathBuf,
        /// Schema compiler executable
        #[arg(long, default_value = "xjc")]
        tool: PathBuf,
    },
    /// Generate service stubs from WSDL service descriptions
    Stubs {
        /// Service description file, repeatable
        #[arg(long = "description")]
        descriptions: Vec<PathBuf>,
        /// Shared output directory for generated stub sources
        #[arg(long)]
        output_dir: PathBuf,
        /// Classpath entry for the stub generator, repeatable
        #[arg(long = "classpath")]
        classpath: Vec<PathBuf>,
        /// Stub generator executable
        #[arg(long, default_value = "wsdl2java")]
        tool: PathBuf,
    },
    /// Render schema documentation through a stylesheet
    Docs {
        /// Directory scanned (non-recursively) for schema documents
        #[arg(long)]
        input_dir: PathBuf,
        /// Stylesheet applied to every schema document
        #[arg(long)]
        stylesheet: PathBuf,
        /// Output directory for rendered pages
        #[arg(long)]
        output_dir: PathBuf,
    },
    /// Run every section of a generation manifest
    All {
        /// Manifest path
        #[arg(long, default_value = "schemaforge.toml")]
        manifest: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Schemas {
            schemas,
            binding,
            package,
            output_dir,
            tool,
        } => {
            run_schemas(
                CompileSchemasRequest {
                    schema_files: schemas,
                    binding_file: binding,
                    package_name: package,
                    output_dir,
                },
                ToolSpec::new(tool),
            )
            .await?
        }
        Commands::Stubs {
            descriptions,
            output_dir,
            classpath,
            tool,
        } => {
            run_stubs(
                GenerateStubsRequest {
                    descriptions,
                    output_dir,
                    classpath,
                },
                ToolSpec::new(tool),
            )
            .await?
        }
        Commands::Docs {
            input_dir,
            stylesheet,
            output_dir,
        } => {
            run_docs(RenderDocsRequest {
                input_dir,
                output_dir,
                stylesheet,
            })
            .await?
        }
        Commands::All { manifest } => run_manifest(&manifest).await?,
    }
    Ok(())
}

async fn run_schemas(request: CompileSchemasRequest, tool: ToolSpec) -> anyhow::Result<()> {
    let runner = Arc::new(TokioProcessRunner::new());
    let use_case = CompileSchemas::new(SchemaCompiler::new(runner, tool));

    let response = use_case
        .execute(request)
        .await
        .context("Schema compilation failed")?;

    info!(
        schemas = response.schemas_compiled,
        output_dir = %response.output_dir.display(),
        "Successfully compiled schemas"
    );
    Ok(())
}

async fn run_stubs(request: GenerateStubsRequest, tool: ToolSpec) -> anyhow::Result<()> {
    let runner = Arc::new(TokioProcessRunner::new());
    let use_case = GenerateStubs::new(ServiceStubGenerator::new(runner, tool));

    let response = use_case
        .execute(request)
        .await
        .context("Stub generation failed")?;

    info!(
        jobs = response.jobs_dispatched,
        output_dir = %response.output_dir.display(),
        "Successfully generated service stubs"
    );
    Ok(())
}

async fn run_docs(request: RenderDocsRequest) -> anyhow::Result<()> {
    let use_case = RenderDocs::new(DocTransformer::new(Arc::new(TeraTransformEngine::new())));

    let response = use_case
        .execute(request)
        .await
        .context("Documentation rendering failed")?;

    info!(
        documents = response.documents_rendered,
        output_dir = %response.output_dir.display(),
        "Successfully rendered schema documentation"
    );
    Ok(())
}

/// Run every section present in the manifest, in a fixed order: schemas,
/// stubs, docs. The sections have no data dependency on each other.
async fn run_manifest(path: &std::path::Path) -> anyhow::Result<()> {
    let manifest = Manifest::load(path)
        .await
        .with_context(|| format!("Failed to load manifest {}", path.display()))?;

    info!(manifest = %path.display(), "Running generation manifest");

    if let Some(schemas) = manifest.schemas {
        run_schemas(
            CompileSchemasRequest {
                schema_files: schemas.files,
                binding_file: schemas.binding,
                package_name: schemas.package,
                output_dir: schemas.output_dir,
            },
            manifest.toolchain.schema_compiler.clone(),
        )
        .await?;
    }

    if let Some(stubs) = manifest.stubs {
        run_stubs(
            GenerateStubsRequest {
                descriptions: stubs.descriptions,
                output_dir: stubs.output_dir,
                classpath: stubs.classpath,
            },
            manifest.toolchain.stub_generator.clone(),
        )
        .await?;
    }

    if let Some(docs) = manifest.docs {
        run_docs(RenderDocsRequest {
            input_dir: docs.input_dir,
            output_dir: docs.output_dir,
            stylesheet: docs.stylesheet,
        })
        .await?;
    }

    Ok(())
}
