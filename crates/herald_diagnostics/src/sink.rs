//! Output sinks receiving fully rendered reporter text.

use crate::severity::Severity;
use std::io::{self, Write};

/// A line-oriented output channel selected by severity.
///
/// The reporter hands over one logical message per call; a message may span
/// multiple lines of already-rendered text. Sink failures are the sink's
/// concern, so the channel methods are infallible from the caller's side.
pub trait ReportSink {
    /// Emits a message on the error channel.
    fn error(&mut self, message: &str);

    /// Emits a message on the warning channel.
    fn warn(&mut self, message: &str);

    /// Emits a message on the info channel.
    fn info(&mut self, message: &str);

    /// Emits a message on the channel matching `severity`.
    fn emit(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => self.error(message),
            Severity::Warning => self.warn(message),
            Severity::Info => self.info(message),
        }
    }
}

/// A sink writing every channel to one [`Write`] target, one line per message.
///
/// Write errors are deliberately ignored: a reporter must not fail the build
/// because its terminal went away.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Creates a sink over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Creates a sink over standard output.
    pub fn stdout() -> WriterSink<io::Stdout> {
        WriterSink::new(io::stdout())
    }

    /// Creates a sink over standard error.
    pub fn stderr() -> WriterSink<io::Stderr> {
        WriterSink::new(io::stderr())
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, message: &str) {
        let _ = writeln!(self.writer, "{message}");
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn error(&mut self, message: &str) {
        self.write_line(message);
    }

    fn warn(&mut self, message: &str) {
        self.write_line(message);
    }

    fn info(&mut self, message: &str) {
        self.write_line(message);
    }
}

/// A sink forwarding each channel to the matching `tracing` level.
///
/// For hosts that route all build output through a `tracing` subscriber
/// instead of a raw terminal stream.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a tracing-backed sink.
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for TracingSink {
    fn error(&mut self, message: &str) {
        tracing::error!("{message}");
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!("{message}");
    }

    fn info(&mut self, message: &str) {
        tracing::info!("{message}");
    }
}
