//! Command tree nodes
//!
//! A [`Cmd`] is a named, optionally aliased entry in the command tree. It owns
//! its children, its handler, and a lazily created [`FlagSet`]. Children are
//! kept in registration order so alias lookups are deterministic; listing for
//! display is always sorted by name.

use clap::Arg;
use indexmap::IndexMap;
use std::fmt;

use crate::error::Result;
use crate::shell::Context;

mod flags;
mod help;

pub use flags::FlagSet;

/// Name of the framework's built-in help command.
pub const HELP_CMD: &str = "help";

/// Function invoked when resolution ends on a command.
pub type Handler = Box<dyn Fn(&mut Context<'_>) -> anyhow::Result<()> + Send + Sync>;

/// Custom autocomplete: receives the arguments after the command and returns candidates.
pub type Completer = Box<dyn Fn(&[String]) -> Vec<String> + Send + Sync>;

/// A shell command and its subcommands.
pub struct Cmd {
    name: String,
    aliases: Vec<String>,
    help: String,
    long_help: String,
    handler: Option<Handler>,
    completer: Option<Completer>,
    children: IndexMap<String, Cmd>,
    flags: Option<FlagSet>,
}

impl fmt::Debug for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cmd")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("help", &self.help)
            .field("has_handler", &self.handler.is_some())
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Cmd {
    /// Create a command with no handler, help or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            help: String::new(),
            long_help: String::new(),
            handler: None,
            completer: None,
            children: IndexMap::new(),
            flags: None,
        }
    }

    /// Add an alternate token resolving to this command.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// One-line help shown in command tables.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Longer description, preferred over the one-liner in the command's own help text.
    pub fn long_help(mut self, long_help: impl Into<String>) -> Self {
        self.long_help = long_help.into();
        self
    }

    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Context<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Override the default completion of subcommand names.
    pub fn completer<F>(mut self, completer: F) -> Self
    where
        F: Fn(&[String]) -> Vec<String> + Send + Sync + 'static,
    {
        self.completer = Some(Box::new(completer));
        self
    }

    /// Builder form of [`Cmd::add_cmd`].
    pub fn subcommand(mut self, child: Cmd) -> Self {
        self.add_cmd(child);
        self
    }

    /// Builder form of declaring an option on [`Cmd::flags`].
    pub fn flag(mut self, arg: Arg) -> Self {
        self.flags().arg(arg);
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn get_help(&self) -> &str {
        &self.help
    }

    pub fn get_long_help(&self) -> &str {
        &self.long_help
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Run the handler, if any.
    pub(crate) fn invoke(&self, ctx: &mut Context<'_>) -> Option<anyhow::Result<()>> {
        self.handler.as_ref().map(|handler| handler(ctx))
    }

    // ---- registry ----

    /// Add `child` as a subcommand, replacing any child with the same name.
    ///
    /// A replaced child keeps its registration slot.
    pub fn add_cmd(&mut self, child: Cmd) {
        tracing::debug!("Adding command '{}' under '{}'", child.name, self.name);
        if let Some(old) = self.children.insert(child.name.clone(), child) {
            tracing::debug!("Replaced existing command '{}'", old.name);
        }
    }

    /// Remove the named subcommand. No-op when absent.
    pub fn delete_cmd(&mut self, name: &str) -> Option<Cmd> {
        let removed = self.children.shift_remove(name);
        if removed.is_some() {
            tracing::debug!("Deleted command '{}' from '{}'", name, self.name);
        }
        removed
    }

    /// Direct subcommands sorted by name.
    pub fn children(&self) -> Vec<&Cmd> {
        let mut cmds: Vec<&Cmd> = self.children.values().collect();
        cmds.sort_by(|a, b| a.name.cmp(&b.name));
        cmds
    }

    /// Direct subcommand with exactly this name
    pub fn child(&self, name: &str) -> Option<&Cmd> {
        self.children.get(name)
    }

    /// True unless the only child (if any) is the help command.
    pub fn has_subcommand(&self) -> bool {
        match self.children.len() {
            0 => false,
            1 => !self.children.contains_key(HELP_CMD),
            _ => true,
        }
    }

    // ---- resolution ----

    /// Index of the child matching `token`: exact name first, then the
    /// first child in registration order listing it as an alias.
    fn child_index(&self, token: &str) -> Option<usize> {
        self.children.get_index_of(token).or_else(|| {
            self.children
                .values()
                .position(|cmd| cmd.aliases.iter().any(|alias| alias == token))
        })
    }

    /// Greedy descent over `tokens`; returns the child index chosen at each depth.
    fn resolve_path(&self, tokens: &[String]) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = self;
        for token in tokens {
            let Some(index) = current.child_index(token) else {
                tracing::trace!("No command matches '{}' under '{}'", token, current.name);
                break;
            };
            current = &current.children[index];
            tracing::trace!("Token '{}' resolved to '{}'", token, current.name);
            path.push(index);
        }
        path
    }

    /// Find the deepest command matching a prefix of `tokens`.
    ///
    /// Returns the matched command (`None` when the first token matches
    /// nothing) and the tokens left over, starting at the first unmatched one.
    pub fn find_cmd<'t>(&self, tokens: &'t [String]) -> (Option<&Cmd>, &'t [String]) {
        let path = self.resolve_path(tokens);
        if path.is_empty() {
            return (None, tokens);
        }

        let mut cmd = self;
        for &index in &path {
            cmd = &cmd.children[index];
        }
        (Some(cmd), &tokens[path.len()..])
    }

    /// Mutable variant of [`Cmd::find_cmd`].
    pub fn find_cmd_mut<'t>(&mut self, tokens: &'t [String]) -> (Option<&mut Cmd>, &'t [String]) {
        let path = self.resolve_path(tokens);
        if path.is_empty() {
            return (None, tokens);
        }

        let mut cmd = self;
        for &index in &path {
            cmd = &mut cmd.children[index];
        }
        (Some(cmd), &tokens[path.len()..])
    }

    // ---- flags ----

    /// The command's flag set, created on first access.
    pub fn flags(&mut self) -> &mut FlagSet {
        self.flags.get_or_insert_with(|| FlagSet::new(&self.name))
    }

    /// The flag set if one was ever created
    pub fn flag_set(&self) -> Option<&FlagSet> {
        self.flags.as_ref()
    }

    /// Parse `arguments` against the flag set. Succeeds trivially when no
    /// flags were ever declared.
    pub fn parse_flags(&mut self, arguments: &[String]) -> Result<()> {
        match self.flags.as_mut() {
            Some(flags) => flags.parse(arguments),
            None => Ok(()),
        }
    }

    // ---- completion ----

    /// Autocomplete candidates for `args`: the custom completer if set,
    /// otherwise the sorted subcommand names.
    pub fn complete(&self, args: &[String]) -> Vec<String> {
        match &self.completer {
            Some(completer) => completer(args),
            None => self.children().into_iter().map(|c| c.name.clone()).collect(),
        }
    }
}
