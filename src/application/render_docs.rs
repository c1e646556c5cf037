//! Use case for rendering schema documentation

use crate::application::{ApplicationError, RenderDocsRequest, RenderDocsResponse};
use crate::generation::{DocTransformer, TransformJob};

/// Use case for one documentation transform pass
pub struct RenderDocs {
    transformer: DocTransformer,
}

impl RenderDocs {
    pub fn new(transformer: DocTransformer) -> Self {
        Self { transformer }
    }

    pub async fn execute(
        &self,
        request: RenderDocsRequest,
    ) -> Result<RenderDocsResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        tracing::info!(
            input_dir = %request.input_dir.display(),
            output_dir = %request.output_dir.display(),
            "Rendering schema documentation"
        );

        // 2. Transform every matching document
        let job = TransformJob {
            input_dir: request.input_dir,
            output_dir: request.output_dir.clone(),
            stylesheet: request.stylesheet,
        };
        let documents_rendered = self.transformer.transform(&job).await?;

        Ok(RenderDocsResponse {
            documents_rendered,
            output_dir: request.output_dir,
        })
    }
}
