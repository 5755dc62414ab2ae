use clap::Parser;
use std::process::ExitCode;

use shelltree::cli::{Cli, Output};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Output::new(false, quiet).error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
