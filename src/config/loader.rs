use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::TexsearchError;

const APP_DIR: &str = "texsearch";
const CONFIG_FILE: &str = "config.toml";

/// `<config_dir>/texsearch/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load the config file
///
/// An explicit `path` must exist. Without one, the default location is
/// tried and a missing file yields `Config::default()`.
pub fn load_config(path: Option<&Path>) -> Result<Config, TexsearchError> {
    match path {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) => match read_config(&path) {
                Err(TexsearchError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                    log::debug!("No config at {}, using defaults", path.display());
                    Ok(Config::default())
                }
                result => result,
            },
            None => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, TexsearchError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
        .map_err(|e| TexsearchError::Config(format!("{}: {}", path.display(), e)))
}

fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
