//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; turning them into the validated,
//! immutable [`ToolSpec`](vaultgate_domain::ToolSpec) is the registry
//! builder's job.

mod broker;
mod secrets;
mod security;
mod tools;

pub use broker::FileBrokerConfig;
pub use secrets::FileSecretsConfig;
pub use security::FileSecurityConfig;
pub use tools::{
    FileSecretConfig, FileToolConfig, FileToolParameter, FileToolsConfig, default_tools,
};

use serde::{Deserialize, Serialize};
use std::time::Duration;
use vaultgate_application::ExecutionLimits;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Tool catalog, keyed by tool name
    pub tools: FileToolsConfig,
    /// Secret store settings
    pub secrets: FileSecretsConfig,
    /// Broker settings
    pub broker: FileBrokerConfig,
    /// Security settings
    pub security: FileSecurityConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            tools: default_tools(),
            secrets: FileSecretsConfig::default(),
            broker: FileBrokerConfig::default(),
            security: FileSecurityConfig::default(),
        }
    }
}

impl FileConfig {
    /// Combine the configured timeouts into the application layer's
    /// [`ExecutionLimits`].
    pub fn execution_limits(&self) -> ExecutionLimits {
        ExecutionLimits::default()
            .with_secret_timeout(Duration::from_secs(self.secrets.lookup_timeout_secs))
            .with_executor_timeout(Duration::from_secs(self.broker.executor_timeout_secs))
    }
}
