use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod config;

use cli::Args;
use commands::execute_command;

fn main() -> ExitCode {
    let args = Args::parse();

    // Guard flushes file logs on drop; keep it alive until exit.
    let _log_guard = match flatkit_log::init_subscriber(args.verbose) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("warning: {err}");
            None
        }
    };

    if let Err(err) = execute_command(args) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
