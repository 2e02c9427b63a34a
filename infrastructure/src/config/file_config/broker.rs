//! Broker configuration from TOML (`[broker]` section)

use serde::{Deserialize, Serialize};

/// Dispatch-side settings for the secrets broker.
///
/// ```toml
/// [broker]
/// executor_timeout_secs = 60
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBrokerConfig {
    /// Timeout for a single executor dispatch, in seconds
    pub executor_timeout_secs: u64,
}

impl Default for FileBrokerConfig {
    fn default() -> Self {
        Self {
            executor_timeout_secs: 60,
        }
    }
}
