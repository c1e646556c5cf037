//! Port interfaces for the generation domain

use async_trait::async_trait;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::generation::{Classpath, GenerationError, ToolSpec};

/// Receives one complete output line at a time.
pub type LineSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Destination for one child-process output stream.
#[derive(Clone)]
pub enum StreamSink {
    /// Drop the stream entirely.
    Discard,
    /// Forward each complete line to the sink.
    Lines(LineSink),
}

impl fmt::Debug for StreamSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamSink::Discard => write!(f, "Discard"),
            StreamSink::Lines(_) => write!(f, "Lines(..)"),
        }
    }
}

/// A fully assembled child-process invocation of an external tool.
///
/// The classpath, when non-empty, is placed on the command line by the
/// runner rather than by the calling component.
#[derive(Debug)]
pub struct ToolInvocation {
    pub tool: ToolSpec,
    pub classpath: Classpath,
    pub args: Vec<String>,
    pub stdout: StreamSink,
    pub stderr: StreamSink,
}

/// Exit state of a completed child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub exit_code: i32,
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Launches external generator tools as child processes.
///
/// A launch failure is an `Err`; an abnormal exit is an `Ok` status with a
/// non-zero code. Components treat both as external tool failures.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, invocation: ToolInvocation) -> Result<RunStatus, GenerationError>;
}

/// Applies a stylesheet to a source document, producing the rendered text.
///
/// Rendering is pure: identical stylesheet and document bytes produce
/// byte-identical output.
#[async_trait]
pub trait TransformEngine: Send + Sync {
    async fn render(&self, stylesheet: &Path, document: &Path)
    -> Result<String, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_status_success() {
        assert!(RunStatus { exit_code: 0 }.is_success());
        assert!(!RunStatus { exit_code: 1 }.is_success());
        assert!(!RunStatus { exit_code: -1 }.is_success());
    }

    #[test]
    fn test_stream_sink_debug_is_opaque() {
        let sink: StreamSink = StreamSink::Lines(Arc::new(|_| {}));
        assert_eq!(format!("{sink:?}"), "Lines(..)");
        assert_eq!(format!("{:?}", StreamSink::Discard), "Discard");
    }
}
