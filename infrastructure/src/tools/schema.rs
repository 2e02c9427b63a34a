//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that renders advertised
//! tool definitions as provider-neutral JSON Schema for the reasoning
//! component's tool-calling protocol. Executor bindings and secret
//! requirements are not part of the rendered surface.

use vaultgate_application::ToolSchemaPort;
use vaultgate_domain::ToolDefinition;

/// Default implementation producing provider-neutral JSON Schema.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"string"` → `"string"`
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), serde_json::json!(schema_type));
            prop.insert(
                "description".to_string(),
                serde_json::json!(param.description),
            );
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }

    fn tools_schema(&self, tools: &[&ToolDefinition]) -> Vec<serde_json::Value> {
        let mut tools: Vec<&&ToolDefinition> = tools.iter().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultgate_domain::{SecretRequirement, ToolParameter};

    #[test]
    fn test_tool_to_schema() {
        let converter = JsonSchemaToolConverter;
        let tool = ToolDefinition::new("get_current_weather", "Current weather", "weather")
            .with_parameter(ToolParameter::new("location", "City name", true))
            .with_parameter(
                ToolParameter::new("days", "Forecast days", false).with_type("integer"),
            );

        let schema = converter.tool_to_schema(&tool);

        assert_eq!(schema["name"], "get_current_weather");
        assert_eq!(schema["description"], "Current weather");
        assert_eq!(schema["input_schema"]["type"], "object");

        let location = &schema["input_schema"]["properties"]["location"];
        assert_eq!(location["type"], "string");
        assert_eq!(location["description"], "City name");

        let days = &schema["input_schema"]["properties"]["days"];
        assert_eq!(days["type"], "integer");

        let required = schema["input_schema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], "location");
    }

    #[test]
    fn test_schema_never_includes_secret_requirements() {
        let converter = JsonSchemaToolConverter;
        let tool = ToolDefinition::new("get_current_weather", "Weather", "weather").with_secret(
            SecretRequirement::from_env("api_key", "OPENWEATHER_API_KEY"),
        );

        let rendered = converter.tool_to_schema(&tool).to_string();
        assert!(!rendered.contains("OPENWEATHER_API_KEY"));
        assert!(!rendered.contains("api_key"));
        assert!(!rendered.contains("executor"));
    }

    #[test]
    fn test_tools_schema_sorted_by_name() {
        let converter = JsonSchemaToolConverter;
        let weather = ToolDefinition::new("get_current_weather", "Weather", "weather");
        let services = ToolDefinition::new("list_available_services", "Services", "services");
        let status = ToolDefinition::new("get_protected_status", "Status", "status");

        let schemas = converter.tools_schema(&[&services, &weather, &status]);
        let names: Vec<_> = schemas.iter().map(|s| s["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "get_current_weather",
                "get_protected_status",
                "list_available_services"
            ]
        );
    }
}
