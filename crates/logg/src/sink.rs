//! crates/logg/src/sink.rs
//! Writing rendered lines to arbitrary writers and to the standard streams.

use std::fmt;
use std::io::{self, Write};

use crate::call_site::CallSite;
use crate::format::{render_line_into, render_variable};
use crate::severity::Severity;

/// Standard stream a line is written to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Stream {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

/// Line-oriented sink that renders log lines into an [`io::Write`] target.
///
/// The sink owns the writer together with a scratch `String` that is reused
/// for every rendered line. Each line is terminated by `\n` and handed to the
/// writer in a single `write_all` call.
///
/// # Examples
///
/// ```
/// use logg::{ConsoleSink, Severity};
///
/// colored::control::set_override(false);
/// let mut sink = ConsoleSink::new(Vec::new());
/// sink.write(Severity::Warning, None, format_args!("disk at {}%", 93))?;
///
/// assert_eq!(sink.into_inner(), b"WARNING: disk at 93%\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct ConsoleSink<W> {
    writer: W,
    scratch: String,
}

impl<W> ConsoleSink<W> {
    /// Creates a sink around `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: String::new(),
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> ConsoleSink<W>
where
    W: Write,
{
    /// Renders and writes one line.
    pub fn write(
        &mut self,
        severity: Severity,
        call_site: Option<&CallSite>,
        message: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        self.scratch.clear();
        render_line_into(&mut self.scratch, severity, call_site, message);
        self.scratch.push('\n');
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Writes a debug line of the form `<name> = '<value>'`.
    pub fn write_variable(
        &mut self,
        name: &str,
        value: &str,
        call_site: Option<&CallSite>,
    ) -> io::Result<()> {
        let body = render_variable(name, value);
        self.write(Severity::Debug, call_site, format_args!("{body}"))
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W> fmt::Debug for ConsoleSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}

/// Writes one line to the stream selected by `severity`.
///
/// The stream is locked only for the duration of the line. Write failures
/// (for example a closed descriptor) are ignored.
pub fn emit(severity: Severity, call_site: Option<&CallSite>, message: fmt::Arguments<'_>) {
    let _ = match severity.stream() {
        Stream::Stdout => ConsoleSink::new(io::stdout().lock()).write(severity, call_site, message),
        Stream::Stderr => ConsoleSink::new(io::stderr().lock()).write(severity, call_site, message),
    };
}

/// Writes a variable dump to standard output.
pub fn emit_variable(name: &str, value: &str, call_site: Option<&CallSite>) {
    let _ = ConsoleSink::new(io::stdout().lock()).write_variable(name, value, call_site);
}
