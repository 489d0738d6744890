//! crates/logg/src/macros.rs
//! Leveled logging macros.
//!
//! `info!`, `warning!` and `error!` are always available. `debug!` and
//! `log_variable!` are real emitters only when the crate is built with the
//! `debug` feature; otherwise they expand to an `if false` block that keeps the
//! template type-checked while evaluating and writing nothing.

/// Captures the [`CallSite`](crate::CallSite) of the invocation.
///
/// # Examples
///
/// ```
/// fn handler() -> logg::CallSite {
///     logg::call_site!()
/// }
///
/// let site = handler();
/// assert_eq!(site.function_name(), "handler");
/// assert!(site.line() > 0);
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::core::file!(),
            ::core::line!(),
            $crate::__private::enclosing_function({
                fn __logg_call_site() {}
                $crate::__private::type_name_of(__logg_call_site)
            }),
        )
    };
}

/// Writes an `INFO: ` line to standard output.
///
/// # Examples
///
/// ```
/// logg::info!("Hello {}!", "world");
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::Severity::Info,
            ::core::option::Option::None,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Writes a `WARNING: ` line to standard error.
///
/// # Examples
///
/// ```
/// logg::warning!("Watch out: {}", 123);
/// ```
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::Severity::Warning,
            ::core::option::Option::None,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Writes an `ERROR: ` line with the caller's call site to standard error.
///
/// # Examples
///
/// ```
/// logg::error!("This is an {}: {}", "error", 77);
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::Severity::Error,
            ::core::option::Option::Some(&$crate::call_site!()),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Writes a `DEBUG: ` line with the caller's call site to standard output.
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::Severity::Debug,
            ::core::option::Option::Some(&$crate::call_site!()),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Compiled out: the `debug` feature is disabled.
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        if false {
            $crate::__private::discard(::core::format_args!($($arg)+));
        }
    };
}

/// Writes `<name> = '<value>'` as a debug line.
///
/// Accepts either a bare identifier, whose name is used verbatim, or an
/// explicit name followed by a value. Raw pointers are printed as addresses.
///
/// ```
/// let retries = 3;
/// logg::log_variable!(retries);
/// logg::log_variable!("retries", retries);
/// ```
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! log_variable {
    ($value:ident) => {
        $crate::log_variable!(::core::stringify!($value), $value)
    };
    ($name:expr, $value:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DumpAddress as _, DumpDisplay as _};
        let __logg_rendered = (&$crate::__private::Dump(&$value)).render();
        $crate::__private::emit_variable(
            $name,
            &__logg_rendered,
            ::core::option::Option::Some(&$crate::call_site!()),
        )
    }};
}

/// Compiled out: the `debug` feature is disabled.
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! log_variable {
    ($value:ident) => {
        if false {
            let _ = &$value;
        }
    };
    ($name:expr, $value:expr $(,)?) => {
        if false {
            let _ = (&$name, &$value);
        }
    };
}

/// Returns the type name of `value`; used to name the enclosing function.
pub fn type_name_of<T>(_value: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Strips the marker item appended by [`call_site!`](crate::call_site).
pub fn enclosing_function(marker_path: &'static str) -> &'static str {
    marker_path
        .strip_suffix("::__logg_call_site")
        .unwrap_or(marker_path)
}

/// Consumes format arguments without rendering them.
pub fn discard(_message: std::fmt::Arguments<'_>) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_site_names_enclosing_function() {
        let (site, line) = (crate::call_site!(), line!());
        assert_eq!(site.function_name(), "call_site_names_enclosing_function");
        assert_eq!(site.file_name(), "macros.rs");
        assert_eq!(site.line(), line);
        assert!(site.function().ends_with("tests::call_site_names_enclosing_function"));
    }

    #[test]
    fn call_site_inside_closure_names_outer_function() {
        let capture = || crate::call_site!();
        assert_eq!(capture().function_name(), "call_site_inside_closure_names_outer_function");
    }

    #[test]
    fn enclosing_function_leaves_foreign_paths_alone() {
        assert_eq!(enclosing_function("app::run::__logg_call_site"), "app::run");
        assert_eq!(enclosing_function("app::run"), "app::run");
    }

    #[cfg(not(feature = "debug"))]
    #[test]
    fn disabled_debug_does_not_evaluate_arguments() {
        let mut evaluated = false;
        crate::debug!("{}", {
            evaluated = true;
            1
        });
        crate::log_variable!("flag", {
            evaluated = true;
            2
        });
        assert!(!evaluated);
    }
}
