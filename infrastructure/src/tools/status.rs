//! get_protected_status executor: protection status of a project
//!
//! Example of a tool authenticating against a protected internal system.
//! The `auth_token` secret would become a bearer header on the internal
//! API request; the current implementation answers with a static payload
//! while exercising the full secret path.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tracing::debug;
use vaultgate_application::ToolExecutor;
use vaultgate_domain::{ResolvedSecrets, ToolError, ToolResult, ValidatedCall};

/// Executor binding name
pub const GET_PROTECTED_STATUS: &str = "get_protected_status";

/// Protected-status lookup against the internal project API.
pub struct ProtectedStatusExecutor;

#[async_trait]
impl ToolExecutor for ProtectedStatusExecutor {
    fn name(&self) -> &str {
        GET_PROTECTED_STATUS
    }

    async fn execute(&self, call: &ValidatedCall, secrets: &ResolvedSecrets) -> ToolResult {
        let project = match call.require_string("project") {
            Ok(project) => project,
            Err(message) => {
                return ToolResult::failure(call.name(), ToolError::execution_failed(message));
            }
        };

        let authenticated = secrets.get("auth_token").is_some();
        if !authenticated {
            debug!(tool = %call.name(), "no auth_token configured, reporting mock status");
        }

        // Authenticated path would be:
        //   GET https://internal-api/projects/{project}/status
        //   Authorization: Bearer <auth_token>
        let payload = serde_json::json!({
            "project": project,
            "status": "active",
            "protected": true,
            "last_check": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            "source": if authenticated { "internal_api" } else { "mock_data" },
        });

        ToolResult::success(call.name(), payload.to_string())
    }
}
