//! CLI entry point for dithered sequence pruning

use clap::Parser;
use ditherprune::io::cli::{Cli, CommandRunner};
use ditherprune::io::logging::{init_logging, report_error, verbosity_level};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(verbosity_level(cli.verbosity()));

    match CommandRunner::new(cli).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
