//! chdsn CLI - Inspect and build analytical database DSNs.

use clap::Parser;
use miette::Diagnostic;

use chdsn_cli::cli::{Cli, Command};
use chdsn_cli::commands;
use chdsn_cli::error::CliResult;
use chdsn_cli::output;

fn main() {
    chdsn_core::logging::init();

    if let Err(e) = run() {
        output::error(&e.to_string());
        if let Some(help) = e.help() {
            output::dim(&help.to_string());
        }
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse(args) => commands::parse::run(args),
        Command::Format(args) => commands::format::run(args),
        Command::Check(args) => commands::check::run(args),
        Command::Url(args) => commands::url::run(args),
        Command::Version => commands::version::run(),
    }
}
