#![deny(unsafe_code)]

#[path = "cli.rs"]
mod cli;

use std::{env, process::ExitCode};

fn main() -> ExitCode {
    cli::run(env::args_os())
}
