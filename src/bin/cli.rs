use std::ffi::OsString;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Arg, ArgAction, ArgMatches, Command};
use logg::{ColorMode, ConsoleConfig, ParseSeverityError, Severity};

/// What a single invocation prints.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Level {
    /// One line at the given severity.
    Log(Severity),
    /// A `log_variable!` dump of the message.
    Variable,
}

impl FromStr for Level {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input == "variable" {
            return Ok(Self::Variable);
        }
        input.parse().map(Self::Log)
    }
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    let command = Command::new("logg-demo")
        .about("Print a single colorized log line.")
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .help("Colorize output: auto, always or never.")
                .value_parser(|value: &str| value.parse::<ColorMode>())
                .default_value("auto"),
        )
        .arg(
            Arg::new("level")
                .value_name("LEVEL")
                .help("One of info, warning, error, debug or variable.")
                .value_parser(|value: &str| value.parse::<Level>())
                .required(true),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .help("Words joined with spaces to form the message.")
                .num_args(1..)
                .action(ArgAction::Append)
                .required(true),
        );

    #[cfg(feature = "tracing")]
    let command = command.arg(
        Arg::new("tracing")
            .long("tracing")
            .help("Emit through tracing macros and the console layer.")
            .action(ArgAction::SetTrue),
    );

    command
}

/// Parses `args`, applies the color mode and prints one line.
///
/// Parse failures are reported by clap on stderr with exit status 2; `--help`
/// prints to stdout and succeeds.
pub fn run<I>(args: I) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(2));
        }
    };

    let color = matches
        .get_one::<ColorMode>("color")
        .copied()
        .unwrap_or_default();
    logg::init(ConsoleConfig::with_color(color));

    let Some(level) = matches.get_one::<Level>("level").copied() else {
        return ExitCode::from(2);
    };
    let message = joined_message(&matches);

    #[cfg(feature = "tracing")]
    {
        if matches.get_flag("tracing") {
            emit_via_tracing(level, &message);
            return ExitCode::SUCCESS;
        }
    }

    emit_level(level, &message);
    ExitCode::SUCCESS
}

fn joined_message(matches: &ArgMatches) -> String {
    matches
        .get_many::<String>("message")
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn emit_level(level: Level, message: &str) {
    match level {
        Level::Log(Severity::Info) => logg::info!("{message}"),
        Level::Log(Severity::Warning) => logg::warning!("{message}"),
        Level::Log(Severity::Error) => logg::error!("{message}"),
        Level::Log(Severity::Debug) => logg::debug!("{message}"),
        Level::Variable => logg::log_variable!(message),
    }
}

#[cfg(feature = "tracing")]
fn emit_via_tracing(level: Level, message: &str) {
    logg::init_tracing();
    match level {
        Level::Log(Severity::Info) => tracing::info!("{message}"),
        Level::Log(Severity::Warning) => tracing::warn!("{message}"),
        Level::Log(Severity::Error) => tracing::error!("{message}"),
        Level::Log(Severity::Debug) | Level::Variable => tracing::debug!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_severities_and_variable() {
        assert_eq!("info".parse::<Level>(), Ok(Level::Log(Severity::Info)));
        assert_eq!("warn".parse::<Level>(), Ok(Level::Log(Severity::Warning)));
        assert_eq!("variable".parse::<Level>(), Ok(Level::Variable));
        assert!("fatal".parse::<Level>().is_err());
    }

    #[test]
    fn message_words_are_joined_with_spaces() {
        let matches = clap_command()
            .try_get_matches_from(["logg-demo", "info", "Hello", "world!"])
            .expect("valid arguments");
        assert_eq!(joined_message(&matches), "Hello world!");
    }

    #[test]
    fn color_defaults_to_auto() {
        let matches = clap_command()
            .try_get_matches_from(["logg-demo", "info", "x"])
            .expect("valid arguments");
        assert_eq!(matches.get_one::<ColorMode>("color"), Some(&ColorMode::Auto));
    }

    #[test]
    fn unknown_color_is_rejected() {
        let error = clap_command()
            .try_get_matches_from(["logg-demo", "--color", "sometimes", "info", "x"])
            .expect_err("invalid color");
        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn message_is_required() {
        let error = clap_command()
            .try_get_matches_from(["logg-demo", "info"])
            .expect_err("missing message");
        assert_eq!(
            error.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
