//! Command-line interface for shelltree
//!
//! Parses the process arguments with clap, builds a shell from the loaded
//! configuration and dispatches the remaining tokens through it once.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

pub mod commands;
mod output;

pub use output::Output;

use crate::config::ShellConfig;
use crate::shell::{Dispatch, Shell};

/// shelltree - run one command line through a command tree
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Command line to dispatch, already split into words
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 1..,
        value_name = "TOKENS"
    )]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        let config = ShellConfig::load_with_custom_config(self.config.as_deref())?;
        let mut shell = Shell::from_config(&config);
        commands::register(&mut shell, &config);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.tokens.is_empty() {
            if shell.root().child(crate::cmd::HELP_CMD).is_none() {
                output.info("Default commands are disabled; nothing to show");
                return Ok(());
            }
            out.write_all(shell.help_text().as_bytes())
                .context("Failed to write help")?;
            return Ok(());
        }

        match shell.dispatch(&self.tokens, &mut out)? {
            Dispatch::Stopped => output.verbose("Shell stopped by command"),
            Dispatch::Help => output.verbose("Command has no handler; printed its help"),
            Dispatch::Handled | Dispatch::Empty => {}
        }
        out.flush().context("Failed to flush output")?;
        Ok(())
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
