//! Optional user settings: built-in defaults + TOML file.
//!
//! - `Settings::default()` → plain output: 6 digits, no color, prompt on a tty
//! - `Settings::from_toml_file(path)` → user overrides
//! - `load_settings(&cli.config)` → explicit file, else ~/.quadroot/config.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::numfmt::{DEFAULT_PRECISION, MAX_PRECISION};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Significant digits for printed numbers.
    pub precision: usize,
    /// Colorize failure lines.
    pub pretty_errors: bool,
    /// Show `Enter a, b, c: ` when stdin is a terminal.
    pub prompt: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION, pretty_errors: false, prompt: true }
    }
}

impl Settings {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(txt)?;
        settings.validate()
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    fn validate(self) -> Result<Self> {
        if !(1..=MAX_PRECISION).contains(&self.precision) {
            bail!("precision must be between 1 and {MAX_PRECISION}, got {}", self.precision);
        }
        Ok(self)
    }
}

/// ~/.quadroot/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".quadroot").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// An explicit `--config` file must exist; the default one is optional.
pub fn load_settings(cli_path: &Option<PathBuf>) -> Result<Settings> {
    let Some(path) = resolve_config_path(cli_path) else {
        return Ok(Settings::default());
    };
    if cli_path.is_none() && !path.exists() {
        crate::debug_log!("[config] {} not found, using defaults", path.display());
        return Ok(Settings::default());
    }
    crate::debug_log!("[config] loading {}", path.display());
    Settings::from_toml_file(&path)
}
