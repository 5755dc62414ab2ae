//! Shell identity and the dispatch contract
//!
//! The [`Shell`] owns the root of the command tree. The read-eval-print loop
//! that drives it lives elsewhere: it tokenizes a line and hands the tokens to
//! [`Shell::dispatch`], which resolves them, parses flags and runs the handler.

use std::io::Write;

use crate::cmd::Cmd;
use crate::config::ShellConfig;
use crate::error::{Error, Result};

mod context;
mod defaults;

pub use context::Context;
pub use defaults::add_default_commands;

/// Borrowed view of a shell: its display name and the root command.
///
/// Commands never store this; it is passed to the operations that need the
/// shell's name or the root's identity.
#[derive(Debug, Clone, Copy)]
pub struct ShellRef<'a> {
    name: &'a str,
    root: &'a Cmd,
}

impl<'a> ShellRef<'a> {
    pub fn new(name: &'a str, root: &'a Cmd) -> Self {
        Self { name, root }
    }

    /// Display name of the shell
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn root(&self) -> &'a Cmd {
        self.root
    }

    /// Identity comparison against the root command.
    pub fn is_root(&self, cmd: &Cmd) -> bool {
        std::ptr::eq(self.root, cmd)
    }
}

/// What a call to [`Shell::dispatch`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// No tokens were given.
    Empty,
    /// The matched command has no handler; its help text was written instead.
    Help,
    /// The handler ran.
    Handled,
    /// The handler ran and asked the shell to stop.
    Stopped,
}

/// Owner of a command tree.
#[derive(Debug)]
pub struct Shell {
    root: Cmd,
    active: bool,
}

impl Shell {
    /// Shell with an empty root named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            root: Cmd::new(name),
            active: true,
        }
    }

    /// Shell with `exit`, `quit`, `help` and `clear` registered.
    pub fn with_default_commands(name: impl Into<String>) -> Self {
        let mut shell = Self::new(name);
        add_default_commands(&mut shell);
        shell
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        if config.default_commands {
            Self::with_default_commands(config.name.as_str())
        } else {
            Self::new(config.name.as_str())
        }
    }

    pub fn name(&self) -> &str {
        self.root.get_name()
    }

    pub fn root(&self) -> &Cmd {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Cmd {
        &mut self.root
    }

    pub fn shell_ref(&self) -> ShellRef<'_> {
        ShellRef::new(self.root.get_name(), &self.root)
    }

    pub fn add_cmd(&mut self, cmd: Cmd) {
        self.root.add_cmd(cmd);
    }

    pub fn delete_cmd(&mut self, name: &str) -> Option<Cmd> {
        self.root.delete_cmd(name)
    }

    /// Help text of the root command.
    pub fn help_text(&self) -> String {
        self.root.help_text(self.shell_ref())
    }

    /// False once a handler has called [`Context::stop`] or [`Shell::stop`] was called.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Resolve `tokens` from the root, parse the leftover tokens against the
    /// matched command's flags and run its handler, writing to `out`.
    pub fn dispatch(&mut self, tokens: &[String], out: &mut dyn Write) -> Result<Dispatch> {
        let Some(first) = tokens.first() else {
            return Ok(Dispatch::Empty);
        };

        match self.root.find_cmd_mut(tokens) {
            (Some(cmd), rest) => {
                if cmd.has_handler() {
                    cmd.parse_flags(rest)?;
                }
            }
            (None, _) => return Err(Error::UnknownCommand(first.clone())),
        }

        let shell = self.shell_ref();
        let (cmd, rest) = match self.root.find_cmd(tokens) {
            (Some(cmd), rest) => (cmd, rest),
            (None, _) => return Err(Error::UnknownCommand(first.clone())),
        };

        tracing::debug!(
            "Dispatching '{}' with {} argument(s)",
            cmd.get_name(),
            rest.len()
        );

        let mut ctx = Context::new(shell, cmd, rest, out);
        let Some(result) = cmd.invoke(&mut ctx) else {
            drop(ctx);
            out.write_all(cmd.help_text(shell).as_bytes())?;
            return Ok(Dispatch::Help);
        };
        let stop_requested = ctx.stop_requested();

        if stop_requested {
            tracing::debug!("'{}' stopped the shell", cmd.get_name());
            self.active = false;
        }
        result?;

        Ok(if stop_requested {
            Dispatch::Stopped
        } else {
            Dispatch::Handled
        })
    }

    /// Autocomplete candidates for the word being typed.
    ///
    /// `tokens` are the complete words before it and `prefix` the partial
    /// word. Unresolvable input completes against the root.
    pub fn complete(&self, tokens: &[String], prefix: &str) -> Vec<String> {
        let candidates = match self.root.find_cmd(tokens) {
            (Some(cmd), rest) => cmd.complete(rest),
            (None, _) => self.root.complete(tokens),
        };

        candidates
            .into_iter()
            .filter(|candidate| candidate.starts_with(prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests;
