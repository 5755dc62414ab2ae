//! Per-command option flags
//!
//! Every command node lazily owns one [`FlagSet`], a thin wrapper around a
//! `clap::Command` keyed by the node's name. Parse errors are rendered into a
//! private buffer so messages from different commands never interleave.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::any::Any;

use crate::error::{Error, Result};

/// Id of the hidden catch-all positional that collects non-flag arguments.
const POSITIONAL: &str = "__args";

/// Option flags declared on one command, plus the state of the last parse.
#[derive(Debug)]
pub struct FlagSet {
    command: Command,
    matches: Option<ArgMatches>,
    error_buf: String,
}

impl FlagSet {
    /// Create an empty flag set identified by `name`.
    pub fn new(name: &str) -> Self {
        let command = Command::new(name.to_string())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .arg(
                Arg::new(POSITIONAL)
                    .action(ArgAction::Append)
                    .num_args(1..)
                    .hide(true),
            );

        Self {
            command,
            matches: None,
            error_buf: String::new(),
        }
    }

    /// Name of the command this flag set belongs to
    pub fn name(&self) -> &str {
        self.command.get_name()
    }

    /// Declare an option flag.
    pub fn arg(&mut self, arg: Arg) -> &mut Self {
        let command = std::mem::take(&mut self.command);
        self.command = command.arg(arg);
        self
    }

    /// True once at least one visible option has been declared.
    pub fn is_declared(&self) -> bool {
        self.visible_options().next().is_some()
    }

    /// Parse `arguments`, replacing the state of any previous parse.
    ///
    /// On failure the rendered message is kept in [`FlagSet::error_output`]
    /// and returned as [`Error::FlagParse`].
    pub fn parse(&mut self, arguments: &[String]) -> Result<()> {
        self.error_buf.clear();
        self.matches = None;

        match self.command.try_get_matches_from_mut(arguments) {
            Ok(matches) => {
                self.matches = Some(matches);
                Ok(())
            }
            Err(err) => {
                self.error_buf.push_str(&err.render().to_string());
                let message = self.error_buf.trim_end().to_string();
                tracing::warn!("Flag parsing failed for '{}': {}", self.name(), message);
                Err(Error::FlagParse {
                    command: self.name().to_string(),
                    message,
                })
            }
        }
    }

    /// Error text written by the last failed parse (empty after a success).
    pub fn error_output(&self) -> &str {
        &self.error_buf
    }

    /// Matches of the last successful parse
    pub fn matches(&self) -> Option<&ArgMatches> {
        self.matches.as_ref()
    }

    /// Value of a boolean switch; false when unset, undeclared or not parsed.
    pub fn get_flag(&self, id: &str) -> bool {
        self.get_one::<bool>(id).copied().unwrap_or(false)
    }

    /// Single typed value of an option.
    pub fn get_one<T>(&self, id: &str) -> Option<&T>
    where
        T: Any + Clone + Send + Sync + 'static,
    {
        self.matches.as_ref()?.try_get_one::<T>(id).ok().flatten()
    }

    /// All typed values of a repeatable option.
    pub fn get_many<T>(&self, id: &str) -> Vec<T>
    where
        T: Any + Clone + Send + Sync + 'static,
    {
        self.matches
            .as_ref()
            .and_then(|m| m.try_get_many::<T>(id).ok().flatten())
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    /// Positional arguments left over after flags were consumed.
    pub fn args(&self) -> Vec<String> {
        self.get_many::<String>(POSITIONAL)
    }

    /// Formatted usage block for the declared options, one line each.
    pub fn usages(&self) -> String {
        let rows: Vec<(String, String)> = self
            .visible_options()
            .map(|arg| (option_label(arg), option_help(arg)))
            .collect();

        let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
        let mut out = String::new();
        for (label, help) in rows {
            let line = format!("  {label:<width$}   {help}");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    fn visible_options(&self) -> impl Iterator<Item = &Arg> {
        self.command
            .get_arguments()
            .filter(|arg| !arg.is_hide_set() && !arg.is_positional())
    }
}

/// Left column of a usage row: `-s, --long <VALUE>`
fn option_label(arg: &Arg) -> String {
    let mut label = match (arg.get_short(), arg.get_long()) {
        (Some(short), Some(long)) => format!("-{short}, --{long}"),
        (Some(short), None) => format!("-{short}"),
        (None, Some(long)) => format!("    --{long}"),
        (None, None) => arg.get_id().to_string(),
    };

    if arg.get_action().takes_values() {
        let value_name = arg
            .get_value_names()
            .and_then(|names| names.first())
            .map(|name| name.to_string())
            .unwrap_or_else(|| arg.get_id().as_str().to_uppercase());
        label.push_str(&format!(" <{value_name}>"));
    }
    label
}

fn option_help(arg: &Arg) -> String {
    let mut help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();

    let defaults: Vec<String> = arg
        .get_default_values()
        .iter()
        .map(|v| v.to_string_lossy().into_owned())
        .collect();
    if arg.get_action().takes_values() && !defaults.is_empty() {
        if !help.is_empty() {
            help.push(' ');
        }
        help.push_str(&format!("(default {})", defaults.join(",")));
    }
    help
}
