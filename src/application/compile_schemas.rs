//! Use case for compiling schema documents into generated sources

use crate::application::{ApplicationError, CompileSchemasRequest, CompileSchemasResponse};
use crate::generation::{CompileRequest, SchemaCompiler};

/// Use case for one schema compiler run
pub struct CompileSchemas {
    compiler: SchemaCompiler,
}

impl CompileSchemas {
    pub fn new(compiler: SchemaCompiler) -> Self {
        Self { compiler }
    }

    pub async fn execute(
        &self,
        request: CompileSchemasRequest,
    ) -> Result<CompileSchemasResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        let schemas_compiled = request.schema_files.len();
        tracing::info!(
            schemas = schemas_compiled,
            output_dir = %request.output_dir.display(),
            "Compiling schemas"
        );

        // 2. Run the external compiler
        let compile = CompileRequest {
            schema_files: request.schema_files,
            binding_file: request.binding_file,
            package_name: request.package_name,
            output_dir: request.output_dir.clone(),
        };
        self.compiler.generate(&compile).await?;

        Ok(CompileSchemasResponse {
            schemas_compiled,
            output_dir: request.output_dir,
        })
    }
}
