//! Secret store configuration from TOML (`[secrets]` section)

use serde::{Deserialize, Serialize};

/// Settings for the vault-backed secret store.
///
/// ```toml
/// [secrets]
/// vault = "SecureTools"
/// lookup_timeout_secs = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSecretsConfig {
    /// Default vault identifier used when the caller's context does not
    /// supply one
    pub vault: String,
    /// Timeout for a single vault lookup, in seconds
    pub lookup_timeout_secs: u64,
}

impl Default for FileSecretsConfig {
    fn default() -> Self {
        Self {
            vault: "SecureTools".to_string(),
            lookup_timeout_secs: 30,
        }
    }
}
