//! # shelltree - command tree core for interactive shells
//!
//! A hierarchical registry of named, aliased commands. A line of input,
//! already split into tokens, is resolved to the deepest matching command;
//! the leftover tokens are parsed against that command's flags and its
//! handler runs. Help text is synthesized from the tree on demand.
//!
//! ## Quick Start
//!
//! ```no_run
//! use shelltree::{Cmd, Shell};
//!
//! let mut shell = Shell::with_default_commands("demo");
//! shell.add_cmd(
//!     Cmd::new("greet")
//!         .alias("hi")
//!         .help("Say hello")
//!         .handler(|ctx| {
//!             let name = ctx.args().join(" ");
//!             ctx.println(format!("hello {name}"))?;
//!             Ok(())
//!         }),
//! );
//!
//! let tokens = vec!["hi".to_string(), "there".to_string()];
//! shell.dispatch(&tokens, &mut std::io::stdout()).unwrap();
//! ```
//!
//! The read-eval-print loop, line editing and terminal handling are left to
//! the embedding application.

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod shell;

pub use cmd::{Cmd, Completer, FlagSet, Handler};
pub use config::ShellConfig;
pub use error::{Error, Result};
pub use shell::{Context, Dispatch, Shell, ShellRef};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
