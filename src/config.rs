//! Layered settings: built-in defaults, then `config.toml`, then CLI flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_PREFIX: &str = "sitestatus";
const CONFIG_FILE: &str = "config.toml";

/// Contents of `~/.config/sitestatus/config.toml`. Keys match the CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Append result lines to this file instead of stderr.
    #[serde(rename = "logFile", default)]
    pub log_file: Option<String>,
}

/// Values given explicitly on the command line. `Some("")` is an explicit
/// empty value and still overrides the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub log_file: Option<String>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// `None` means stderr.
    pub log_file: Option<PathBuf>,
}

/// Existing config file under the XDG config dirs, if any.
pub fn default_config_path() -> Option<PathBuf> {
    match xdg::BaseDirectories::with_prefix(CONFIG_PREFIX) {
        Ok(dirs) => dirs.find_config_file(CONFIG_FILE),
        Err(err) => {
            tracing::debug!("no XDG config dirs: {}", err);
            None
        }
    }
}

pub fn load_from(path: &Path) -> Result<FileConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FileConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load an explicitly named config file (must exist), or the default one when
/// present. No config file at all yields defaults; nothing is written to disk.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match default_config_path() {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            load_from(&path)
        }
        None => Ok(FileConfig::default()),
    }
}

/// Apply the layers in order: defaults, config file, explicit flags.
pub fn resolve(file: FileConfig, overrides: Overrides) -> Settings {
    let log_file = overrides
        .log_file
        .or(file.log_file)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);
    Settings { log_file }
}
