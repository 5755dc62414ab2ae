//! Commands the shelltree binary registers on top of the defaults
//!
//! Each command lives in its own module and exposes a constructor returning
//! the [`Cmd`](crate::Cmd) to add to the root.

use crate::config::ShellConfig;
use crate::shell::Shell;

pub mod config;
pub mod echo;
pub mod version;

/// Add the binary's commands to `shell`.
pub fn register(shell: &mut Shell, config: &ShellConfig) {
    shell.add_cmd(echo::command());
    shell.add_cmd(config::command(config.clone()));
    shell.add_cmd(version::command());
}
