//! Reading `config.toml` from an explicit path or the platform default.
//!
//! Nothing here validates. The binary applies its command-line overrides
//! first and then runs [`crate::validation::validate`] once.

use parley_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// `<config_dir>/parley/config.toml`, e.g. `~/.config/parley/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("parley").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Parse a TOML file; missing sections and fields take their defaults.
pub fn load_from_path(path: &Path) -> Result<crate::ParleyConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the default config file, writing the commented template on first run.
pub fn load_default() -> Result<crate::ParleyConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(crate::ParleyConfig::default())
        }
        other => other,
    }
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write = |p: &Path| -> std::io::Result<()> {
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(p, default_config_toml())
    };
    write(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to create {}: {e}", path.display()))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
