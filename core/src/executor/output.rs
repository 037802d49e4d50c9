use std::io::Write;
use std::sync::Mutex;

/// User-facing progress stream.
///
/// This is separate from `tracing`: it carries the `[i/N]` progress lines and the
/// final status of every task list, and is the only shared mutable state in a run.
pub trait Console: Send + Sync {
    fn message(&self, line: &str);
    fn error(&self, line: &str);
}

/// Writes messages to stdout and errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole {
    color: bool,
}

impl StdConsole {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Console for StdConsole {
    fn message(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }

    fn error(&self, line: &str) {
        let mut err = std::io::stderr().lock();
        if self.color {
            let _ = writeln!(err, "\x1b[31m{line}\x1b[0m");
        } else {
            let _ = writeln!(err, "{line}");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Out,
    Err,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub stream: ConsoleStream,
    pub text: String,
}

/// Captures everything written to it. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<ConsoleLine>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// All captured text, both streams, in write order.
    pub fn text(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.text).collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|l| l.stream == ConsoleStream::Err)
            .map(|l| l.text)
            .collect()
    }

    fn push(&self, stream: ConsoleStream, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(ConsoleLine {
                stream,
                text: line.to_string(),
            });
        }
    }
}

impl Console for MemoryConsole {
    fn message(&self, line: &str) {
        self.push(ConsoleStream::Out, line);
    }

    fn error(&self, line: &str) {
        self.push(ConsoleStream::Err, line);
    }
}
