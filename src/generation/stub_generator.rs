//! Fans out stub generation over a batch of service descriptions.

use std::sync::Arc;

use crate::generation::{
    Classpath, GenerationError, ProcessRunner, StreamSink, StubBatch, StubFailure, StubJob,
    ToolInvocation, ToolSpec,
};

/// Generates client/server stub sources, one child process per service
/// description.
///
/// Jobs are independent and run concurrently on the shared runtime; the
/// batch completes only after every job has finished. Child output streams
/// are discarded. Each job writes a disjoint artifact set under the shared
/// output directory, by convention of the external tool.
pub struct ServiceStubGenerator {
    runner: Arc<dyn ProcessRunner>,
    tool: ToolSpec,
}

impl ServiceStubGenerator {
    pub fn new(runner: Arc<dyn ProcessRunner>, tool: ToolSpec) -> Self {
        Self { runner, tool }
    }

    /// Run the whole batch, returning the number of jobs dispatched.
    ///
    /// Failures are collected across all jobs and surfaced together; a
    /// failing job never prevents the others from completing.
    pub async fn generate(&self, batch: &StubBatch) -> Result<usize, GenerationError> {
        tokio::fs::create_dir_all(&batch.output_dir).await?;

        let jobs = batch.jobs()?;
        let total = jobs.len();

        let mut handles = Vec::with_capacity(total);
        for job in jobs {
            let runner = Arc::clone(&self.runner);
            let tool = self.tool.clone();
            let classpath = batch.classpath.clone();
            let description = job.description.clone();
            let handle = tokio::spawn(run_job(runner, tool, classpath, job));
            handles.push(async move { (description, handle.await) });
        }

        let mut failures = Vec::new();
        for (description, outcome) in futures::future::join_all(handles).await {
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(error)) => failures.push(StubFailure {
                    description,
                    reason: error.to_string(),
                }),
                Err(join_error) => failures.push(StubFailure {
                    description,
                    reason: format!("job aborted: {join_error}"),
                }),
            }
        }

        if failures.is_empty() {
            tracing::info!(jobs = total, "Stub generation batch complete");
            Ok(total)
        } else {
            Err(GenerationError::StubBatch { failures, total })
        }
    }
}

async fn run_job(
    runner: Arc<dyn ProcessRunner>,
    tool: ToolSpec,
    classpath: Classpath,
    job: StubJob,
) -> Result<(), GenerationError> {
    tracing::debug!(
        description = %job.description.display(),
        location = %job.wsdl_location,
        "Dispatching stub generation job"
    );

    let status = runner
        .run(ToolInvocation {
            tool: tool.clone(),
            classpath,
            args: job.args(),
            stdout: StreamSink::Discard,
            stderr: StreamSink::Discard,
        })
        .await?;

    if !status.is_success() {
        return Err(GenerationError::external_tool(
            tool.display_name(),
            format!("exit code {}", status.exit_code),
        ));
    }

    Ok(())
}
