//! Tool domain value objects — immutable result types
//!
//! These types form the **output side** of the pipeline. A [`ToolResult`]
//! is the only object allowed to cross the trust boundary back toward the
//! reasoning component, so its content and error text are always passed
//! through the scrubber before the broker releases it.

use serde::{Deserialize, Serialize};

use crate::secret::{ResolvedSecrets, scrub};

/// Error that occurred during tool execution.
///
/// Carried inside a failed [`ToolResult`]. The message is deliberately
/// generic: executor internals (HTTP bodies, subprocess output) may echo a
/// credential, so whatever ends up here is still scrubbed by the broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "EXECUTION_FAILED", "SECRET_UNAVAILABLE")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn secret_unavailable(message: impl Into<String>) -> Self {
        Self::new("SECRET_UNAVAILABLE", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL", message)
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::new(
            "TIMEOUT",
            format!("Operation timed out: {}", operation.into()),
        )
    }

    pub fn cancelled() -> Self {
        Self::new("CANCELLED", "Operation cancelled")
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution.
///
/// Produced by executors and finalized by the broker, which scrubs both
/// the content and any error message before this value leaves the trusted
/// zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Output content (empty on failure)
    pub content: String,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            content: content.into(),
            error: None,
            duration_ms: None,
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            content: String::new(),
            error: Some(error),
            duration_ms: None,
        }
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Redact every resolved secret value from the content and error text.
    ///
    /// Applied unconditionally by the broker on both success and failure
    /// paths — an upstream error body echoing a credential is a realistic
    /// exfiltration vector.
    pub fn scrubbed(mut self, secrets: &ResolvedSecrets) -> Self {
        self.content = scrub(&self.content, secrets.values());
        if let Some(error) = self.error.as_mut() {
            error.message = scrub(&error.message, secrets.values());
        }
        self
    }
}
