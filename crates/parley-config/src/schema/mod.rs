//! Configuration schema types for Parley.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the chat loop has always used.

mod logging;
mod provider;
mod session;

pub use logging::*;
pub use provider::*;
pub use session::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Parley.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ParleyConfig {
    pub session: SessionConfig,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}
