//! crates/logg/src/format.rs
//! Line rendering: colorized labels, call-site descriptors and variable dumps.

use std::fmt::{self, Display, Write as _};

use colored::{Color, ColoredString, Colorize};

use crate::call_site::CallSite;
use crate::severity::Severity;

/// Color applied to every value inside a call-site descriptor.
pub const CALL_SITE_COLOR: Color = Color::BrightMagenta;

/// Separator between the call-site descriptor and the message body.
pub const MESSAGE_SEPARATOR: &str = " | Message: ";

/// Wraps the display text of `value` in `color`, followed by a reset sequence.
///
/// The escape sequences are omitted when colorization is disabled through
/// [`init`](crate::init) or the environment.
///
/// # Examples
///
/// ```
/// use logg::paint;
/// use colored::Color;
///
/// colored::control::set_override(true);
/// assert_eq!(paint("ok", Color::Green).to_string(), "\x1b[32mok\x1b[0m");
/// ```
pub fn paint<T: Display>(value: T, color: Color) -> ColoredString {
    let text = value.to_string();
    text.as_str().color(color)
}

/// Renders `Thread <id>: '<file>:<line>' in '<function>'`.
#[must_use]
pub fn render_call_site(site: &CallSite) -> String {
    format!(
        "Thread {}: '{}:{}' in '{}'",
        paint(format_args!("0X{:X}", site.thread()), CALL_SITE_COLOR),
        paint(site.file_name(), CALL_SITE_COLOR),
        paint(site.line(), CALL_SITE_COLOR),
        paint(site.function_name(), CALL_SITE_COLOR),
    )
}

/// Renders a complete line without the trailing newline.
///
/// # Examples
///
/// ```
/// use logg::{render_line, Severity};
///
/// colored::control::set_override(false);
/// let line = render_line(Severity::Info, None, format_args!("Hello {}!", "world"));
/// assert_eq!(line, "INFO: Hello world!");
/// ```
#[must_use]
pub fn render_line(
    severity: Severity,
    call_site: Option<&CallSite>,
    message: fmt::Arguments<'_>,
) -> String {
    let mut line = String::new();
    render_line_into(&mut line, severity, call_site, message);
    line
}

/// Appends a rendered line to `buffer`.
///
/// The call site is only rendered for severities that
/// [annotate](Severity::annotates_call_site) it; a missing descriptor falls
/// back to the plain `label + message` layout.
pub fn render_line_into(
    buffer: &mut String,
    severity: Severity,
    call_site: Option<&CallSite>,
    message: fmt::Arguments<'_>,
) {
    let label = paint(severity.label(), severity.color());
    // Writing into a String cannot fail.
    let _ = match call_site.filter(|_| severity.annotates_call_site()) {
        Some(site) => write!(
            buffer,
            "{label}{}{MESSAGE_SEPARATOR}{message}",
            render_call_site(site)
        ),
        None => write!(buffer, "{label}{message}"),
    };
}

/// Renders a variable dump body as `<name> = '<value>'`.
///
/// `value` is usually produced by [`log_variable!`](crate::log_variable),
/// which renders raw pointers as addresses.
#[must_use]
pub fn render_variable(name: &str, value: &str) -> String {
    format!("{name} = '{value}'")
}

/// Renders a raw address as `0x` followed by at least eight lowercase hex digits.
#[must_use]
pub fn render_address(address: usize) -> String {
    format!("0x{address:08x}")
}
