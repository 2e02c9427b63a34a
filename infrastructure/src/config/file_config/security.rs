//! Security configuration from TOML (`[security]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Caller-facing restrictions and audit settings.
///
/// ```toml
/// [security]
/// allowed_tools = ["get_current_weather"]
/// audit_log = "logs/vaultgate.audit.jsonl"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSecurityConfig {
    /// Subset of registered tools this deployment exposes.
    /// Empty = every registered tool.
    pub allowed_tools: Vec<String>,
    /// Path for the JSONL audit log. None = auditing disabled.
    pub audit_log: Option<PathBuf>,
}
