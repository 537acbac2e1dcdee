mod loader;
pub use loader::{load_user_config, load_user_config_from};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::get_app_dir;

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Client settings (`[client]` table in the TOML file).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Daemon URL used when neither `--url` nor `SHOPPING_LIST_URL` is given
    #[serde(default)]
    pub url: Option<String>,
}

/// Daemon settings (`[daemon]` table in the TOML file).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DaemonConfig {
    /// Bind address used when neither `--addr` nor `SHOPPING_LIST_ADDR` is given
    #[serde(default)]
    pub addr: Option<String>,
}

/// Top-level user configuration, deserialized from `~/.shopping-list/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub daemon: DaemonConfig,
}

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    get_app_dir().map(|d| d.join("config.toml"))
}

#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
