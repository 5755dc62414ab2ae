use anyhow::Result;
use clap::{Arg, ArgAction};

use crate::cmd::Cmd;
use crate::shell::Context;
use crate::{PKG_DESCRIPTION, PKG_NAME, VERSION};

pub fn command() -> Cmd {
    Cmd::new("version")
        .help("Show version information")
        .flag(
            Arg::new("detailed")
                .short('d')
                .long("detailed")
                .action(ArgAction::SetTrue)
                .help("Show detailed version information"),
        )
        .handler(execute)
}

fn execute(ctx: &mut Context<'_>) -> Result<()> {
    ctx.println(format!("{PKG_NAME} {VERSION}"))?;
    if ctx.get_flag("detailed") {
        ctx.println(format!("Description: {PKG_DESCRIPTION}"))?;
        ctx.println(format!("Shell name: {}", ctx.shell_name()))?;
    }
    Ok(())
}
