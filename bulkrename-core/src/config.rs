use crate::rules::RuleConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".bulkrename";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Named rule sets selectable with `--preset`
    #[serde(default)]
    pub presets: BTreeMap<String, RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default preview format: "table", "diff", "summary", "json" or "none"
    #[serde(default = "default_preview")]
    pub preview_format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,

    /// How many failed renames to list after execution
    #[serde(default = "default_max_failures_shown")]
    pub max_failures_shown: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            preview_format: default_preview(),
            use_color: None,
            max_failures_shown: default_max_failures_shown(),
        }
    }
}

fn default_preview() -> String {
    "table".to_string()
}

fn default_max_failures_shown() -> usize {
    5
}

impl Config {
    /// Load `.bulkrename/config.toml` from the current directory, then the
    /// user config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::candidate_paths()
            .into_iter()
            .find(|path| path.exists())
        {
            return Self::load_from_path(&path);
        }

        Ok(Self::default())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(CONFIG_DIR).join(CONFIG_FILE));
        }
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("bulkrename").join(CONFIG_FILE));
        }
        paths
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn preset(&self, name: &str) -> Option<&RuleConfig> {
        self.presets.get(name)
    }
}

/// Read a standalone rules file (a TOML table of `RuleConfig` fields)
pub fn load_rules(path: &Path) -> Result<RuleConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules from {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse rules from {}", path.display()))
}
