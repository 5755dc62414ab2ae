//! Configuration management for shelltree
//!
//! Layers embedded defaults, user and repository TOML files (or one explicit
//! file) and `SHELLTREE_*` environment variables with figment.

mod core;

pub use self::core::ShellConfig;

#[cfg(test)]
mod tests;
