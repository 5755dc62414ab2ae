//! Commands every shell gets unless configured otherwise

use anyhow::{Result, bail};

use super::{Context, Shell};
use crate::cmd::{Cmd, HELP_CMD};

/// Register `exit`, `quit`, `help` and `clear` on the shell root.
pub fn add_default_commands(shell: &mut Shell) {
    shell.add_cmd(Cmd::new("exit").help("Exit the program").handler(exit));
    shell.add_cmd(Cmd::new("quit").help("Quit the program").handler(exit));
    shell.add_cmd(
        Cmd::new(HELP_CMD)
            .help("Display help")
            .long_help("Display help for the shell, or for the command named by the arguments")
            .handler(help),
    );
    shell.add_cmd(Cmd::new("clear").help("Clear the screen").handler(clear));
}

fn exit(ctx: &mut Context<'_>) -> Result<()> {
    ctx.stop();
    Ok(())
}

/// `help` prints the shell help; `help <command...>` prints that command's.
fn help(ctx: &mut Context<'_>) -> Result<()> {
    if ctx.args().is_empty() {
        let text = ctx.help_text();
        ctx.println(text)?;
        return Ok(());
    }

    let shell = ctx.shell();
    let args = ctx.args().to_vec();
    match shell.root().find_cmd(&args) {
        (Some(cmd), []) => {
            ctx.println(cmd.help_text(shell))?;
            Ok(())
        }
        (Some(_), rest) => bail!("Unknown subcommand: {}", rest.join(" ")),
        (None, _) => bail!("Unknown command: {}", args.join(" ")),
    }
}

fn clear(ctx: &mut Context<'_>) -> Result<()> {
    ctx.clear_screen()?;
    Ok(())
}
