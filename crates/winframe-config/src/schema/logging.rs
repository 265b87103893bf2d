//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Default `tracing` filter directive for the host binary.
///
/// A bare level (`"debug"`) applies to the winframe crates only; any
/// full `EnvFilter` directive is passed through as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
