//! list_available_services executor: capability catalog
//!
//! Needs no secrets, but still runs through the broker for uniformity —
//! every external action takes the same validated path.

use async_trait::async_trait;
use vaultgate_application::ToolExecutor;
use vaultgate_domain::{ResolvedSecrets, ToolResult, ValidatedCall};

/// Executor binding name
pub const LIST_AVAILABLE_SERVICES: &str = "list_available_services";

/// Static service catalog.
pub struct ListServicesExecutor;

#[async_trait]
impl ToolExecutor for ListServicesExecutor {
    fn name(&self) -> &str {
        LIST_AVAILABLE_SERVICES
    }

    async fn execute(&self, call: &ValidatedCall, _secrets: &ResolvedSecrets) -> ToolResult {
        let payload = serde_json::json!({
            "services": [
                {
                    "name": "weather",
                    "description": "Get current weather for any location",
                },
                {
                    "name": "protected_status",
                    "description": "Check project protection status",
                },
            ],
        });
        ToolResult::success(call.name(), payload.to_string())
    }
}
