//! Configuration commands
//!
//! `config` only groups its subcommands; run alone it prints its help.

use anyhow::Result;

use crate::cmd::Cmd;
use crate::config::ShellConfig;
use crate::shell::Context;

pub fn command(config: ShellConfig) -> Cmd {
    Cmd::new("config")
        .alias("cfg")
        .help("Configuration commands")
        .subcommand(
            Cmd::new("show")
                .help("Show the effective configuration")
                .handler(move |ctx| show(ctx, &config)),
        )
}

fn show(ctx: &mut Context<'_>, config: &ShellConfig) -> Result<()> {
    ctx.println(format!("{:<18} {}", "name", config.name))?;
    ctx.println(format!("{:<18} {}", "default_commands", config.default_commands))?;
    Ok(())
}
