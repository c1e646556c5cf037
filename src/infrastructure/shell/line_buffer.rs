//! Line-buffering adapter between raw child-process output and log sinks.

use crate::generation::LineSink;

/// Accumulates bytes until a newline and forwards each complete line to
/// the sink. A trailing partial line is flushed on [`finish`].
///
/// A trailing carriage return is stripped so CRLF streams do not leak
/// `\r` into sink lines.
///
/// [`finish`]: LineBuffer::finish
pub struct LineBuffer {
    sink: LineSink,
    buffer: Vec<u8>,
}

impl LineBuffer {
    pub fn new(sink: LineSink) -> Self {
        Self {
            sink,
            buffer: Vec::new(),
        }
    }

    /// Feed a chunk of bytes, emitting every complete line it closes.
    pub fn push(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if byte == b'\n' {
                self.emit();
            } else {
                self.buffer.push(byte);
            }
        }
    }

    /// Flush any trailing partial line. Call once when the stream closes.
    pub fn finish(&mut self) {
        if !self.buffer.is_empty() {
            self.emit();
        }
    }

    fn emit(&mut self) {
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }
        let line = String::from_utf8_lossy(&self.buffer).into_owned();
        self.buffer.clear();
        (self.sink)(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn collector() -> (LineSink, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);
        let sink: LineSink = Arc::new(move |line: &str| {
            captured.lock().unwrap().push(line.to_string());
        });
        (sink, lines)
    }

    #[test]
    fn test_lines_split_within_one_chunk() {
        let (sink, lines) = collector();
        let mut buffer = LineBuffer::new(sink);

        buffer.push(b"first\nsecond\n");
        buffer.finish();

        assert_eq!(*lines.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_lines_reassemble_across_chunk_boundaries() {
        let (sink, lines) = collector();
        let mut buffer = LineBuffer::new(sink);

        buffer.push(b"spl");
        buffer.push(b"it li");
        buffer.push(b"ne\nnext");
        buffer.finish();

        assert_eq!(*lines.lock().unwrap(), vec!["split line", "next"]);
    }

    #[test]
    fn test_trailing_partial_line_is_flushed_on_finish() {
        let (sink, lines) = collector();
        let mut buffer = LineBuffer::new(sink);

        buffer.push(b"no newline at end");
        assert!(lines.lock().unwrap().is_empty());

        buffer.finish();
        assert_eq!(*lines.lock().unwrap(), vec!["no newline at end"]);
    }

    #[test]
    fn test_crlf_does_not_leak_carriage_returns() {
        let (sink, lines) = collector();
        let mut buffer = LineBuffer::new(sink);

        buffer.push(b"windows\r\nstyle\r\n");
        buffer.finish();

        assert_eq!(*lines.lock().unwrap(), vec!["windows", "style"]);
    }

    #[test]
    fn test_empty_lines_are_forwarded() {
        let (sink, lines) = collector();
        let mut buffer = LineBuffer::new(sink);

        buffer.push(b"a\n\nb\n");
        buffer.finish();

        assert_eq!(*lines.lock().unwrap(), vec!["a", "", "b"]);
    }
}
