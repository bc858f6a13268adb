//! Parley configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let mut config = parley_config::load(None).expect("failed to load config");
//! config.session.history_limit = Some(5);
//! parley_config::validation::validate(&config).expect("invalid config");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LogLevel, LoggingConfig, ParleyConfig, ProviderConfig, SessionConfig};

use parley_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default when `None`.
///
/// The result is not validated, so callers can apply overrides first.
pub fn load(path: Option<&Path>) -> Result<ParleyConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
