//! Renders schema documents to browsable pages through a stylesheet engine.

use std::path::PathBuf;
use std::sync::Arc;

use crate::generation::{GenerationError, TransformEngine, TransformJob};

/// Extension of the source schema documents picked up from the input
/// directory.
pub const SOURCE_EXTENSION: &str = "xsd";
/// Extension of the rendered output documents.
pub const TARGET_EXTENSION: &str = "html";

/// Applies one stylesheet to every schema document of a directory,
/// mirroring file names with the target extension.
///
/// Inputs are processed sequentially; the first failure aborts the pass
/// but already-written outputs are not retracted.
pub struct DocTransformer {
    engine: Arc<dyn TransformEngine>,
}

impl DocTransformer {
    pub fn new(engine: Arc<dyn TransformEngine>) -> Self {
        Self { engine }
    }

    /// Run the transform pass, returning the number of documents rendered.
    /// A directory without matching inputs succeeds trivially.
    pub async fn transform(&self, job: &TransformJob) -> Result<usize, GenerationError> {
        tokio::fs::create_dir_all(&job.output_dir).await?;

        let mut inputs = Vec::new();
        let mut entries = tokio::fs::read_dir(&job.input_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
            {
                inputs.push(path);
            }
        }
        // Directory iteration order is platform-defined.
        inputs.sort();

        let mut rendered = 0;
        for input in &inputs {
            let output = self.output_path(job, input)?;
            let page = self.engine.render(&job.stylesheet, input).await?;
            tokio::fs::write(&output, page).await.map_err(|error| {
                GenerationError::transform(
                    input.clone(),
                    format!("writing `{}`: {error}", output.display()),
                )
            })?;
            rendered += 1;
            tracing::debug!(
                input = %input.display(),
                output = %output.display(),
                "Rendered schema document"
            );
        }

        Ok(rendered)
    }

    fn output_path(
        &self,
        job: &TransformJob,
        input: &std::path::Path,
    ) -> Result<PathBuf, GenerationError> {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| GenerationError::transform(input, "input has no usable file name"))?;
        Ok(job.output_dir.join(format!("{stem}.{TARGET_EXTENSION}")))
    }
}
