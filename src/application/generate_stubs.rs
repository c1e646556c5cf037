//! Use case for generating service stubs from service descriptions

use crate::application::{ApplicationError, GenerateStubsRequest, GenerateStubsResponse};
use crate::generation::{Classpath, ServiceStubGenerator, StubBatch};

/// Use case for one stub generation batch
pub struct GenerateStubs {
    generator: ServiceStubGenerator,
}

impl GenerateStubs {
    pub fn new(generator: ServiceStubGenerator) -> Self {
        Self { generator }
    }

    pub async fn execute(
        &self,
        request: GenerateStubsRequest,
    ) -> Result<GenerateStubsResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        tracing::info!(
            descriptions = request.descriptions.len(),
            output_dir = %request.output_dir.display(),
            "Generating service stubs"
        );

        // 2. Fan the batch out and wait for every job
        let batch = StubBatch {
            descriptions: request.descriptions,
            output_dir: request.output_dir.clone(),
            classpath: Classpath::new(request.classpath),
        };
        let jobs_dispatched = self.generator.generate(&batch).await?;

        Ok(GenerateStubsResponse {
            jobs_dispatched,
            output_dir: request.output_dir,
        })
    }
}
