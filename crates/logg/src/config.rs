//! crates/logg/src/config.rs
//! Console configuration: when to emit color escape sequences.

use std::fmt;
use std::str::FromStr;

/// Controls whether labels and call-site values are colorized.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    /// Defer to the environment (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`).
    #[default]
    Auto,
    /// Always emit escape sequences.
    Always,
    /// Never emit escape sequences.
    Never,
}

impl ColorMode {
    /// Returns the lowercase name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`ColorMode`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseColorModeError {
    input: String,
}

impl fmt::Display for ParseColorModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color mode '{}' (expected auto, always or never)",
            self.input
        )
    }
}

impl std::error::Error for ParseColorModeError {}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(ParseColorModeError {
                input: input.to_owned(),
            }),
        }
    }
}

/// Process-wide console configuration applied by [`init`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsoleConfig {
    /// Colorization policy.
    pub color: ColorMode,
}

impl ConsoleConfig {
    /// Creates a configuration with the given color mode.
    #[must_use]
    pub const fn with_color(color: ColorMode) -> Self {
        Self { color }
    }
}

/// Applies `config` to every subsequent log line in the process.
///
/// Calling it again replaces the previous configuration.
///
/// # Examples
///
/// ```
/// use logg::{init, ColorMode, ConsoleConfig, Severity, render_line};
///
/// init(ConsoleConfig::with_color(ColorMode::Never));
/// let line = render_line(Severity::Warning, None, format_args!("plain"));
/// assert_eq!(line, "WARNING: plain");
/// ```
pub fn init(config: ConsoleConfig) {
    match config.color {
        ColorMode::Auto => colored::control::unset_override(),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}
