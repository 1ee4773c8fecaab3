use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::catalog::{Catalog, CatalogError};
use crate::model::config::AppConfig;

pub const CONFIG_FILE: &str = "config.toml";
pub const PREFS_FILE: &str = "prefs.json";
pub const LOG_DIR: &str = "logs";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid catalog in config.toml: {0}")]
    CatalogError(#[from] CatalogError),
}

/// Resolve the folio config directory: explicit override, then
/// `$XDG_CONFIG_HOME/folio`, then `~/.config/folio`.
pub fn config_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join(".config"));
    base.join("folio")
}

/// Get the user's home directory
fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read config.toml from the config directory. A missing file yields the
/// default config.
pub fn read_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(ConfigError::ReadError { path, source: e }),
    };
    let config: AppConfig = toml::from_str(&text)?;
    Ok(config)
}

/// Build the catalog, applying project/skill overrides from config
pub fn load_catalog(config: &AppConfig) -> Result<Catalog, ConfigError> {
    let catalog = Catalog::with_overrides(config.projects.clone(), config.skills.clone())?;
    Ok(catalog)
}
