//! pacecalc CLI entrypoint.
//!
//! A thin wrapper over the `cli` module: parse args, run one calculation and
//! exit with the appropriate status. For programmatic use, prefer the library
//! API (`pacecalc::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
