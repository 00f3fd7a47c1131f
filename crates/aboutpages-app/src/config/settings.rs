//! Loader for `config.toml`

use std::path::{Path, PathBuf};

use aboutpages_core::prelude::*;

use super::types::PageConfig;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "about-pages";

/// Default location of the config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load page configuration.
///
/// `path` overrides the default location. A missing file yields defaults; an
/// unreadable or unparsable file is logged and also yields defaults.
pub fn load_config(path: Option<&Path>) -> PageConfig {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                debug!("No config directory on this platform, using defaults");
                return PageConfig::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return PageConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                debug!("Loaded config from {:?}", config_path);
                config
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                PageConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            PageConfig::default()
        }
    }
}
