//! Help text synthesis
//!
//! The root command and every other command render through separate
//! templates; both are followed by the subcommand table when there is
//! something to list.

use super::{Cmd, HELP_CMD};
use crate::shell::ShellRef;

impl Cmd {
    /// Usage text for this command and its subcommands.
    ///
    /// # Panics
    ///
    /// Rendering the root panics if no `help` command is registered under it.
    /// The default setup always registers one, so this is a setup bug.
    pub fn help_text(&self, shell: ShellRef<'_>) -> String {
        let mut text = if shell.is_root(self) {
            render_root(self.help_help_text(), shell.name())
        } else {
            let flag_usages = self.flag_set().map(|f| f.usages()).unwrap_or_default();
            render_node(self.summary(), shell.name(), &self.name, &flag_usages)
        };

        if self.has_subcommand() {
            text.push_str("Commands:\n");
            text.push_str(&render_commands(&self.children()));
        }
        text
    }

    /// One-line help of the `help` command, shown at the top of the root help.
    fn help_help_text(&self) -> &str {
        let path = [HELP_CMD.to_string()];
        match self.find_cmd(&path) {
            (Some(cmd), _) => cmd.get_help(),
            (None, _) => panic!(
                "no '{HELP_CMD}' command registered under '{}'; the root help requires one",
                self.name
            ),
        }
    }

    /// Long help if set, otherwise the one-liner (possibly empty).
    fn summary(&self) -> &str {
        if self.long_help.is_empty() {
            &self.help
        } else {
            &self.long_help
        }
    }
}

fn render_root(help_help: &str, shell_name: &str) -> String {
    format!("{help_help}\n\nUsage:\n    {shell_name} [options]\n    \n")
}

fn render_node(summary: &str, shell_name: &str, name: &str, flag_usages: &str) -> String {
    format!("{summary}\n\nUsage:\n    {shell_name} {name} [options]\n\nFlags:\n{flag_usages}")
}

/// Two-column `name  help` table, names padded to the widest one.
fn render_commands(cmds: &[&Cmd]) -> String {
    let width = cmds.iter().map(|c| c.name.chars().count()).max().unwrap_or(0) + 2;
    let mut out = String::new();
    for cmd in cmds {
        let row = format!("  {:<width$}    {}", cmd.name, cmd.help);
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}
