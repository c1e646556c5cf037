//! Drives the external schema compiler over an ordered set of schema files.

use std::sync::Arc;

use crate::generation::{
    Classpath, CompileRequest, GenerationError, LineSink, ProcessRunner, StreamSink,
    ToolInvocation, ToolSpec,
};

/// Invokes the schema-to-source compiler as a child process.
///
/// Child stdout is forwarded line-by-line to the informational sink, child
/// stderr to the low-priority sink; neither stream is promoted to an error
/// level. A failed run leaves whatever the tool already wrote in the output
/// directory.
pub struct SchemaCompiler {
    runner: Arc<dyn ProcessRunner>,
    tool: ToolSpec,
    stdout_sink: LineSink,
    stderr_sink: LineSink,
}

impl SchemaCompiler {
    /// Create a compiler with the default tracing sinks: stdout at info,
    /// stderr at debug.
    pub fn new(runner: Arc<dyn ProcessRunner>, tool: ToolSpec) -> Self {
        Self::with_sinks(
            runner,
            tool,
            Arc::new(|line: &str| tracing::info!(target: "schemaforge::tool", "{line}")),
            Arc::new(|line: &str| tracing::debug!(target: "schemaforge::tool", "{line}")),
        )
    }

    /// Create a compiler with caller-supplied log sinks.
    pub fn with_sinks(
        runner: Arc<dyn ProcessRunner>,
        tool: ToolSpec,
        stdout_sink: LineSink,
        stderr_sink: LineSink,
    ) -> Self {
        Self {
            runner,
            tool,
            stdout_sink,
            stderr_sink,
        }
    }

    pub async fn generate(&self, request: &CompileRequest) -> Result<(), GenerationError> {
        request.validate()?;

        tokio::fs::create_dir_all(&request.output_dir).await?;

        let args = request.args();
        tracing::info!(
            output_dir = %request.output_dir.display(),
            schemas = request.schema_files.len(),
            "Generating schema classes"
        );
        tracing::debug!(?args, "Schema compiler arguments");

        let status = self
            .runner
            .run(ToolInvocation {
                tool: self.tool.clone(),
                classpath: Classpath::default(),
                args,
                stdout: StreamSink::Lines(Arc::clone(&self.stdout_sink)),
                stderr: StreamSink::Lines(Arc::clone(&self.stderr_sink)),
            })
            .await?;

        if !status.is_success() {
            return Err(GenerationError::external_tool(
                self.tool.display_name(),
                format!("exit code {}", status.exit_code),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::RunStatus;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Runner that records invocations and returns a fixed exit code.
    struct RecordingRunner {
        invocations: Mutex<Vec<(PathBuf, Vec<String>)>>,
        exit_code: i32,
    }

    impl RecordingRunner {
        fn new(exit_code: i32) -> Self {
            Self {
                invocations: Mutex::new(Vec::new()),
                exit_code,
            }
        }
    }

    #[async_trait]
    impl ProcessRunner for RecordingRunner {
        async fn run(&self, invocation: ToolInvocation) -> Result<RunStatus, GenerationError> {
            self.invocations
                .lock()
                .unwrap()
                .push((invocation.tool.program.clone(), invocation.args));
            Ok(RunStatus {
                exit_code: self.exit_code,
            })
        }
    }

    fn request_with_schema(dir: &std::path::Path) -> CompileRequest {
        let schema = dir.join("model.xsd");
        std::fs::write(&schema, "<xs:schema/>").unwrap();
        CompileRequest {
            schema_files: vec![schema],
            binding_file: None,
            package_name: None,
            output_dir: dir.join("generated"),
        }
    }

    #[tokio::test]
    async fn test_generate_creates_output_dir_and_runs_tool() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Arc::new(RecordingRunner::new(0));
        let compiler = SchemaCompiler::new(runner.clone(), ToolSpec::new("xjc"));

        let request = request_with_schema(dir.path());
        compiler.generate(&request).await.unwrap();

        assert!(request.output_dir.is_dir());
        let invocations = runner.invocations.lock().unwrap();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].0, PathBuf::from("xjc"));
        assert_eq!(invocations[0].1[0], "-d");
    }

    #[tokio::test]
    async fn test_generate_maps_nonzero_exit_to_tool_failure() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Arc::new(RecordingRunner::new(2));
        let compiler = SchemaCompiler::new(runner, ToolSpec::new("xjc"));

        let error = compiler
            .generate(&request_with_schema(dir.path()))
            .await
            .unwrap_err();

        match error {
            GenerationError::ExternalToolFailure { tool, reason } => {
                assert_eq!(tool, "xjc");
                assert!(reason.contains("exit code 2"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_schema_set_before_running() {
        let runner = Arc::new(RecordingRunner::new(0));
        let compiler = SchemaCompiler::new(runner.clone(), ToolSpec::new("xjc"));

        let request = CompileRequest {
            schema_files: vec![],
            binding_file: None,
            package_name: None,
            output_dir: PathBuf::from("unused"),
        };

        assert!(compiler.generate(&request).await.is_err());
        assert!(runner.invocations.lock().unwrap().is_empty());
    }
}
