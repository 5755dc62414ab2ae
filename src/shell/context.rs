//! Handler context

use std::fmt::Display;
use std::io::{self, Write};

use super::ShellRef;
use crate::cmd::{Cmd, FlagSet};

/// ANSI sequence: clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Everything a handler sees while it runs.
pub struct Context<'a> {
    shell: ShellRef<'a>,
    cmd: &'a Cmd,
    raw_args: &'a [String],
    args: Vec<String>,
    out: &'a mut dyn Write,
    stop_requested: bool,
}

impl<'a> Context<'a> {
    /// Build a context for `cmd`. `raw_args` are the tokens left after
    /// resolution; positional arguments come from the parsed flag set when
    /// the command has one.
    pub(crate) fn new(
        shell: ShellRef<'a>,
        cmd: &'a Cmd,
        raw_args: &'a [String],
        out: &'a mut dyn Write,
    ) -> Self {
        let args = match cmd.flag_set() {
            Some(flags) => flags.args(),
            None => raw_args.to_vec(),
        };

        Self {
            shell,
            cmd,
            raw_args,
            args,
            out,
            stop_requested: false,
        }
    }

    /// The command being run
    pub fn cmd(&self) -> &'a Cmd {
        self.cmd
    }

    pub fn shell(&self) -> ShellRef<'a> {
        self.shell
    }

    pub fn shell_name(&self) -> &'a str {
        self.shell.name()
    }

    /// Positional arguments (flags removed).
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Tokens left after resolution, before flag parsing.
    pub fn raw_args(&self) -> &'a [String] {
        self.raw_args
    }

    /// Parsed flags of the command, if it declared any.
    pub fn flags(&self) -> Option<&'a FlagSet> {
        self.cmd.flag_set()
    }

    /// Shorthand for a boolean switch on the command's flags.
    pub fn get_flag(&self, id: &str) -> bool {
        self.flags().is_some_and(|flags| flags.get_flag(id))
    }

    /// Help text of the whole shell (the root command).
    pub fn help_text(&self) -> String {
        self.shell.root().help_text(self.shell)
    }

    pub fn print(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.out, "{text}")
    }

    pub fn println(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.flush()
    }

    /// Ask the shell to stop once this handler returns.
    pub fn stop(&mut self) {
        self.stop_requested = true;
    }

    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }
}
