#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logg` prints colorized, leveled log lines to the standard streams. Four
//! severities are supported, each with a fixed label and color:
//!
//! | Macro | Stream | Label | Call site |
//! |---|---|---|---|
//! | [`info!`] | stdout | `INFO: ` (green) | no |
//! | [`warning!`] | stderr | `WARNING: ` (yellow) | no |
//! | [`error!`] | stderr | `ERROR: ` (red) | yes |
//! | [`debug!`] | stdout | `DEBUG: ` (bright cyan) | yes |
//!
//! [`log_variable!`] dumps a named value as a debug line.
//!
//! # Design
//!
//! Templates go through [`format_args!`](std::format_args), so placeholder mismatches are build
//! errors. Error and debug lines carry a [`CallSite`] captured by
//! [`call_site!`]: a hashed thread id, the basename of the source file, the
//! line and the short name of the enclosing function. Rendering lives in
//! [`render_line`]; [`ConsoleSink`] writes rendered lines to any
//! [`std::io::Write`] target and [`emit`] routes them to stdout or stderr.
//!
//! `debug!` and `log_variable!` are compiled out unless the `debug` feature is
//! enabled. When disabled they evaluate nothing and write nothing.
//!
//! # Invariants
//!
//! - Every colorized segment is followed by its own reset sequence, so color
//!   never bleeds into the next segment or into later terminal output.
//! - Every emitted line ends with `\n` and is handed to the stream in a single
//!   write. No lock is held across lines; concurrent callers may interleave.
//! - Nothing is stored between calls.
//!
//! # Errors
//!
//! The macros never report errors; a failed stream write is dropped. Callers
//! that need the [`std::io::Error`] use [`ConsoleSink`] directly.
//!
//! # Examples
//!
//! ```
//! use logg::{ColorMode, ConsoleConfig};
//!
//! logg::init(ConsoleConfig::with_color(ColorMode::Never));
//! logg::info!("Hello {}!", "world");
//! logg::warning!("Watch out: {}", 123);
//! logg::error!("This is an {}: {}", "error", 77);
//! logg::debug!("Dbg: {} {}", 1, "two");
//! ```

mod call_site;
mod config;
mod dump;
mod format;
mod macros;
mod severity;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use call_site::{CallSite, current_thread_id, short_function_name};
pub use config::{ColorMode, ConsoleConfig, ParseColorModeError, init};
pub use format::{
    CALL_SITE_COLOR, MESSAGE_SEPARATOR, paint, render_address, render_call_site, render_line,
    render_line_into, render_variable,
};
pub use severity::{ParseSeverityError, Severity, Style};
pub use sink::{ConsoleSink, Stream, emit, emit_variable};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{ConsoleLayer, init_tracing};

/// Support items for macro expansions; not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::dump::{Dump, DumpAddress, DumpDisplay};
    pub use crate::macros::{discard, enclosing_function, type_name_of};
    pub use crate::sink::emit_variable;
}
