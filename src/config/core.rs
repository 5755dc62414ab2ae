use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Settings used to build a [`crate::Shell`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Display name of the shell, shown in usage lines
    pub name: String,

    /// Register `exit`, `quit`, `help` and `clear`
    #[serde(default = "default_commands")]
    pub default_commands: bool,
}

fn default_commands() -> bool {
    true
}

impl ShellConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let figment = Self::figment(custom_config);

        let config: ShellConfig = figment
            .extract()
            .context("Failed to load shelltree configuration")?;
        config.validate()?;

        tracing::debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    fn figment(custom_config: Option<&str>) -> Figment {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // A custom config replaces the user and repository files
        if let Some(custom_path) = custom_config {
            figment = figment.merge(Toml::file(custom_path));
        } else {
            figment = figment
                .merge(Toml::file(Self::user_config_path()))
                .merge(Toml::file("shelltree.toml"));
        }

        // Environment variables always have highest priority
        figment.merge(Env::prefixed("SHELLTREE_"))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            anyhow::bail!("Shell name cannot be empty");
        }
        if self.name.chars().any(char::is_whitespace) {
            anyhow::bail!("Shell name cannot contain whitespace: '{}'", self.name);
        }
        Ok(())
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/shelltree/config.toml", home),
            Err(_) => "~/.config/shelltree/config.toml".to_string(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            name: "shelltree".to_string(),
            default_commands: true,
        }
    }
}
