//! Tokio-backed process runner for external generator tools.

use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::generation::{
    GenerationError, LineSink, ProcessRunner, RunStatus, StreamSink, ToolInvocation,
};
use crate::infrastructure::shell::LineBuffer;

/// Default [`ProcessRunner`] implementation on tokio child processes.
///
/// A non-empty classpath is placed on the command line as `-cp <joined>`
/// ahead of the tool's fixed arguments, matching JVM launcher conventions.
/// Piped output streams are drained concurrently with the child so a full
/// pipe can never stall it.
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, invocation: ToolInvocation) -> Result<RunStatus, GenerationError> {
        let mut command = Command::new(&invocation.tool.program);
        if !invocation.classpath.is_empty() {
            command.arg("-cp").arg(invocation.classpath.to_search_path());
        }
        command
            .args(&invocation.tool.args)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(stdio_for(&invocation.stdout))
            .stderr(stdio_for(&invocation.stderr));

        let mut child = command.spawn().map_err(|error| {
            GenerationError::external_tool(
                invocation.tool.display_name(),
                format!("failed to launch: {error}"),
            )
        })?;

        let stdout_drain = match &invocation.stdout {
            StreamSink::Lines(sink) => child
                .stdout
                .take()
                .map(|stream| tokio::spawn(drain(stream, Arc::clone(sink)))),
            StreamSink::Discard => None,
        };
        let stderr_drain = match &invocation.stderr {
            StreamSink::Lines(sink) => child
                .stderr
                .take()
                .map(|stream| tokio::spawn(drain(stream, Arc::clone(sink)))),
            StreamSink::Discard => None,
        };

        let status = child.wait().await?;

        for drain_task in [stdout_drain, stderr_drain].into_iter().flatten() {
            drain_task.await.map_err(std::io::Error::other)??;
        }

        Ok(RunStatus {
            exit_code: status.code().unwrap_or(-1),
        })
    }
}

fn stdio_for(sink: &StreamSink) -> Stdio {
    match sink {
        StreamSink::Discard => Stdio::null(),
        StreamSink::Lines(_) => Stdio::piped(),
    }
}

async fn drain<R>(mut stream: R, sink: LineSink) -> std::io::Result<()>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    let mut lines = LineBuffer::new(sink);
    let mut chunk = [0u8; 4096];
    loop {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        lines.push(&chunk[..read]);
    }
    lines.finish();
    Ok(())
}
