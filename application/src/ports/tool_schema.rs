//! Tool schema conversion port.
//!
//! Separates "which tools are advertised" (the validation gate's
//! allow-list) from "how to serialize them for the reasoning component's
//! tool-calling protocol" (infrastructure). Definitions cross this port;
//! secret requirements never do.

use vaultgate_domain::ToolDefinition;

/// Port for rendering tool definitions in the format the reasoning
/// component's tool-calling protocol expects (JSON Schema).
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to provider-neutral JSON Schema.
    ///
    /// Only name, description, and parameters are rendered — executor
    /// bindings and secret requirements stay on this side of the boundary.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert a set of advertised tools to a JSON Schema array (sorted
    /// by name).
    fn tools_schema(&self, tools: &[&ToolDefinition]) -> Vec<serde_json::Value>;
}
