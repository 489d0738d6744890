//! crates/logg/src/tracing_bridge.rs
//! Bridge between the tracing crate and the console formatter.
//!
//! [`ConsoleLayer`] is a tracing-subscriber layer that renders events with the
//! same labels, colors, streams and call-site descriptors as the `logg` macros,
//! so libraries instrumented with `tracing` share one console format.
//!
//! # Usage
//!
//! ```rust,ignore
//! logg::init_tracing();
//!
//! tracing::info!("listening on {}", addr);
//! tracing::error!(peer = %peer, "handshake failed");
//! ```

use std::fmt::Write as _;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::call_site::{CallSite, current_thread_id};
use crate::severity::Severity;
use crate::sink::emit;

/// A tracing layer that writes every event as a console log line.
///
/// Debug and trace events follow the same build-mode gate as
/// [`debug!`](crate::debug): they are dropped unless the crate is built with
/// the `debug` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleLayer {
    _private: (),
}

impl ConsoleLayer {
    /// Creates the layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Maps a tracing level to a severity, or `None` when compiled out.
    const fn severity_for(level: &Level) -> Option<Severity> {
        match *level {
            Level::ERROR => Some(Severity::Error),
            Level::WARN => Some(Severity::Warning),
            Level::INFO => Some(Severity::Info),
            Level::DEBUG | Level::TRACE => {
                if cfg!(feature = "debug") {
                    Some(Severity::Debug)
                } else {
                    None
                }
            }
        }
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if let Some((severity, site, message)) = Self::describe(event) {
            emit(severity, Some(&site), format_args!("{message}"));
        }
    }
}

impl ConsoleLayer {
    /// Extracts the severity, call site and message text of an event.
    fn describe(event: &Event<'_>) -> Option<(Severity, CallSite, String)> {
        let metadata = event.metadata();
        let severity = Self::severity_for(metadata.level())?;

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let site = CallSite::from_parts(
            current_thread_id(),
            metadata.file().unwrap_or("<unknown>"),
            metadata.line().unwrap_or(0),
            metadata.module_path().unwrap_or_else(|| metadata.target()),
        );
        Some((severity, site, visitor.finish()))
    }
}

/// Collects the `message` field followed by any other fields as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Installs [`ConsoleLayer`] as the global tracing subscriber.
///
/// Fails silently when a global subscriber is already set.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer::new())
        .try_init();
}
