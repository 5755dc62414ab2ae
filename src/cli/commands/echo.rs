//! Echo command - prints its arguments back.

use anyhow::Result;
use clap::{Arg, ArgAction};

use crate::cmd::Cmd;
use crate::shell::Context;

pub fn command() -> Cmd {
    Cmd::new("echo")
        .alias("print")
        .help("Print the arguments")
        .long_help("Print the arguments separated by single spaces")
        .flag(
            Arg::new("no-newline")
                .short('n')
                .long("no-newline")
                .action(ArgAction::SetTrue)
                .help("Do not print the trailing newline"),
        )
        .flag(
            Arg::new("upper")
                .short('u')
                .long("upper")
                .action(ArgAction::SetTrue)
                .help("Convert to upper case"),
        )
        .handler(execute)
}

fn execute(ctx: &mut Context<'_>) -> Result<()> {
    let mut text = ctx.args().join(" ");
    if ctx.get_flag("upper") {
        text = text.to_uppercase();
    }

    if ctx.get_flag("no-newline") {
        ctx.print(text)?;
    } else {
        ctx.println(text)?;
    }
    Ok(())
}
