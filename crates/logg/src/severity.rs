//! crates/logg/src/severity.rs
//! Severity levels and their fixed label/color table.

use std::fmt;
use std::str::FromStr;

use colored::Color;

use crate::sink::Stream;

/// Severity of a console log line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Severity {
    /// Informational message written to standard output.
    Info,
    /// Warning written to standard error.
    Warning,
    /// Error written to standard error together with its call site.
    Error,
    /// Debug message written to standard output together with its call site.
    Debug,
}

/// Label and color bound to a [`Severity`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Style {
    /// Prefix printed at the start of the line, including the trailing `": "`.
    pub label: &'static str,
    /// Foreground color applied to the label.
    pub color: Color,
}

// Indexed by `Severity as usize`.
const STYLES: [Style; 4] = [
    Style {
        label: "INFO: ",
        color: Color::Green,
    },
    Style {
        label: "WARNING: ",
        color: Color::Yellow,
    },
    Style {
        label: "ERROR: ",
        color: Color::Red,
    },
    Style {
        label: "DEBUG: ",
        color: Color::BrightCyan,
    },
];

impl Severity {
    /// Every severity in declaration order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Warning, Self::Error, Self::Debug];

    /// Returns the lowercase name of the severity.
    ///
    /// # Examples
    ///
    /// ```
    /// use logg::Severity;
    ///
    /// assert_eq!(Severity::Info.as_str(), "info");
    /// assert_eq!(Severity::Debug.as_str(), "debug");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Debug => "debug",
        }
    }

    /// Returns the label/color entry for this severity.
    #[must_use]
    pub const fn style(self) -> Style {
        STYLES[self as usize]
    }

    /// Returns the prefix rendered at the start of every line.
    ///
    /// Downstream tooling can match these literals to classify output.
    ///
    /// # Examples
    ///
    /// ```
    /// use logg::Severity;
    ///
    /// assert_eq!(Severity::Info.label(), "INFO: ");
    /// assert_eq!(Severity::Warning.label(), "WARNING: ");
    /// assert_eq!(Severity::Error.label(), "ERROR: ");
    /// assert_eq!(Severity::Debug.label(), "DEBUG: ");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.style().label
    }

    /// Returns the color used for the label.
    #[must_use]
    pub const fn color(self) -> Color {
        self.style().color
    }

    /// Returns the standard stream lines of this severity are written to.
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Info | Self::Debug => Stream::Stdout,
            Self::Warning | Self::Error => Stream::Stderr,
        }
    }

    /// Reports whether lines of this severity carry a call-site descriptor.
    #[must_use]
    pub const fn annotates_call_site(self) -> bool {
        matches!(self, Self::Error | Self::Debug)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_table_matches_severity_order() {
        for severity in Severity::ALL {
            assert!(severity.label().starts_with(&severity.as_str().to_uppercase()));
            assert!(severity.label().ends_with(": "));
        }
    }

    #[test]
    fn colors_are_fixed_per_severity() {
        assert_eq!(Severity::Info.color(), Color::Green);
        assert_eq!(Severity::Warning.color(), Color::Yellow);
        assert_eq!(Severity::Error.color(), Color::Red);
        assert_eq!(Severity::Debug.color(), Color::BrightCyan);
    }

    #[test]
    fn info_and_debug_go_to_stdout() {
        assert_eq!(Severity::Info.stream(), Stream::Stdout);
        assert_eq!(Severity::Debug.stream(), Stream::Stdout);
        assert_eq!(Severity::Warning.stream(), Stream::Stderr);
        assert_eq!(Severity::Error.stream(), Stream::Stderr);
    }

    #[test]
    fn only_error_and_debug_annotate_call_site() {
        assert!(!Severity::Info.annotates_call_site());
        assert!(!Severity::Warning.annotates_call_site());
        assert!(Severity::Error.annotates_call_site());
        assert!(Severity::Debug.annotates_call_site());
    }

    #[test]
    fn parse_accepts_names_and_warn_alias() {
        for severity in Severity::ALL {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(severity));
        }
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let error = "INFO".parse::<Severity>().expect_err("case sensitive");
        assert_eq!(error.to_string(), "unrecognised log severity");
        assert!("trace".parse::<Severity>().is_err());
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
