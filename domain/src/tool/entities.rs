//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::secret::SecretRequirement;

/// Definition of a tool that the reasoning component may request.
///
/// Loaded once from configuration and immutable afterwards. The
/// `executor` field names the concrete capability in the executor
/// table that performs the external action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "get_current_weather")
    pub name: String,
    /// Human-readable description, advertised to the reasoning component
    pub description: String,
    /// Name of the executor bound to this tool
    pub executor: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
    /// Secrets this tool needs, in resolution order
    pub secrets: Vec<SecretRequirement>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type ("string", "number", "integer", "boolean")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        executor: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            executor: executor.into(),
            parameters: Vec::new(),
            secrets: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_secret(mut self, requirement: SecretRequirement) -> Self {
        self.secrets.push(requirement);
        self
    }

    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn requires_secrets(&self) -> bool {
        !self.secrets.is_empty()
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// Immutable catalog of tool definitions — the allow-list.
///
/// Built once by the registry loader at startup and passed as an explicit
/// dependency to the validation gate and the broker. There is no mutation
/// API beyond the builder-style [`register`](Self::register) used during
/// load.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A tool call as produced by the reasoning component.
///
/// Untrusted input: every field must pass the validation gate before the
/// call may reach the broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Correlation id assigned by the tool-calling protocol
    #[serde(default)]
    pub id: String,
    /// Name of the requested tool
    pub name: String,
    /// Arguments as emitted by the model
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCallRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }
}

/// A tool call that has passed the validation gate.
///
/// Fields are private: the only way to obtain a `ValidatedCall` is through
/// [`validate_call`](crate::tool::validation::validate_call), so anything
/// the broker receives has been checked against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCall {
    id: String,
    name: String,
    arguments: HashMap<String, serde_json::Value>,
}

impl ValidatedCall {
    pub(crate) fn new(
        id: String,
        name: String,
        arguments: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id,
            name,
            arguments,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &HashMap<String, serde_json::Value> {
        &self.arguments
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }

    /// Get an optional i64 argument
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.arguments.get(key).and_then(|v| v.as_i64())
    }

    /// Get an optional bool argument
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.arguments.get(key).and_then(|v| v.as_bool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("get_current_weather", "Current weather", "weather")
            .with_parameter(ToolParameter::new("location", "City name", true))
            .with_parameter(
                ToolParameter::new("format", "celsius or fahrenheit", false).with_type("string"),
            );

        assert_eq!(tool.name, "get_current_weather");
        assert_eq!(tool.executor, "weather");
        assert_eq!(tool.parameters.len(), 2);
        assert!(tool.parameter("location").unwrap().required);
        assert!(!tool.requires_secrets());
    }

    #[test]
    fn test_tool_spec() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new(
                "get_current_weather",
                "Weather",
                "weather",
            ))
            .register(ToolDefinition::new(
                "list_available_services",
                "List services",
                "services",
            ));

        assert_eq!(spec.len(), 2);
        assert!(!spec.is_empty());
        assert!(spec.contains("get_current_weather"));
        assert!(spec.get("list_available_services").is_some());
        assert!(spec.get("delete_everything").is_none());
        assert!(spec.names().any(|name| name == "get_current_weather"));
    }

    #[test]
    fn test_tool_call_request() {
        let request = ToolCallRequest::new("get_current_weather")
            .with_id("call-1")
            .with_arg("location", "Tokyo");

        assert_eq!(request.name, "get_current_weather");
        assert_eq!(request.id, "call-1");
        assert_eq!(
            request.arguments.get("location").and_then(|v| v.as_str()),
            Some("Tokyo")
        );
    }

    #[test]
    fn test_validated_call_accessors() {
        let mut args = HashMap::new();
        args.insert("location".to_string(), serde_json::json!("Tokyo"));
        args.insert("days".to_string(), serde_json::json!(3));
        let call = ValidatedCall::new("c1".to_string(), "get_current_weather".to_string(), args);

        assert_eq!(call.name(), "get_current_weather");
        assert_eq!(call.get_string("location"), Some("Tokyo"));
        assert_eq!(call.require_string("location").unwrap(), "Tokyo");
        assert!(call.require_string("missing").is_err());
        assert_eq!(call.get_i64("days"), Some(3));
        assert_eq!(call.get_bool("days"), None);
    }
}
