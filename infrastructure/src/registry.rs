//! Registry builder — from raw config to the immutable tool catalog
//!
//! Turns a parsed [`FileConfig`] into the validated [`ToolSpec`] the gate
//! and broker share. Every check here is fail-fast: a malformed catalog
//! must stop the process at startup, not surface mid-call.

use thiserror::Error;
use tracing::debug;
use vaultgate_application::{ExecutorTable, UnboundExecutor};
use vaultgate_domain::{
    InvalidRequirement, SecretRequirement, ToolDefinition, ToolParameter, ToolSpec, VaultRef,
};

use crate::config::{FileConfig, FileSecretConfig, FileToolConfig};

/// Parameter types the catalog admits. Anything else is a load error, so
/// call-time validation never meets an unknown type.
const KNOWN_PARAM_TYPES: &[&str] = &["string", "number", "integer", "boolean"];

/// The registry source is malformed — fatal at load, the process must not
/// start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tool '{tool}' is missing required field '{field}'")]
    MissingField { tool: String, field: String },

    #[error("tool '{tool}' parameter '{param}' has unknown type '{param_type}'")]
    InvalidParameterType {
        tool: String,
        param: String,
        param_type: String,
    },

    #[error("tool '{tool}': {source}")]
    InvalidSecret {
        tool: String,
        #[source]
        source: InvalidRequirement,
    },

    #[error("two tools share the name '{name}'")]
    DuplicateTool { name: String },

    #[error(transparent)]
    UnboundExecutor(#[from] UnboundExecutor),

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Build the immutable tool catalog from configuration.
///
/// Validates every entry and checks each executor binding against the
/// table, so `UnboundExecutor` is caught here rather than at first call.
pub fn build_registry(
    config: &FileConfig,
    executors: &ExecutorTable,
) -> Result<ToolSpec, ConfigError> {
    let mut spec = ToolSpec::new();

    for (name, tool_config) in &config.tools {
        let definition = build_definition(name, tool_config)?;
        if spec.contains(&definition.name) {
            return Err(ConfigError::DuplicateTool {
                name: definition.name,
            });
        }
        debug!(tool = %definition.name, executor = %definition.executor, "registered tool");
        spec = spec.register(definition);
    }

    executors.ensure_bound(&spec)?;
    Ok(spec)
}

fn build_definition(name: &str, config: &FileToolConfig) -> Result<ToolDefinition, ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::MissingField {
            tool: "<unnamed>".to_string(),
            field: "name".to_string(),
        });
    }
    if config.description.trim().is_empty() {
        return Err(ConfigError::MissingField {
            tool: name.to_string(),
            field: "description".to_string(),
        });
    }
    if config.executor.trim().is_empty() {
        return Err(ConfigError::MissingField {
            tool: name.to_string(),
            field: "executor".to_string(),
        });
    }

    let mut definition = ToolDefinition::new(name, &config.description, &config.executor);

    for param in &config.parameters {
        if param.name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                tool: name.to_string(),
                field: "parameters.name".to_string(),
            });
        }
        if !KNOWN_PARAM_TYPES.contains(&param.param_type.as_str()) {
            return Err(ConfigError::InvalidParameterType {
                tool: name.to_string(),
                param: param.name.clone(),
                param_type: param.param_type.clone(),
            });
        }
        definition = definition.with_parameter(
            ToolParameter::new(&param.name, &param.description, param.required)
                .with_type(&param.param_type),
        );
    }

    for secret in &config.secrets {
        let requirement = build_requirement(secret);
        requirement
            .validate()
            .map_err(|source| ConfigError::InvalidSecret {
                tool: name.to_string(),
                source,
            })?;
        definition = definition.with_secret(requirement);
    }

    Ok(definition)
}

fn build_requirement(config: &FileSecretConfig) -> SecretRequirement {
    SecretRequirement {
        name: config.name.clone(),
        env: config.env.clone().filter(|v| !v.is_empty()),
        vault: match (&config.item, &config.field) {
            (Some(item), Some(field)) if !item.is_empty() && !field.is_empty() => {
                Some(VaultRef::new(item, field))
            }
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileToolParameter;
    use async_trait::async_trait;
    use std::sync::Arc;
    use vaultgate_application::ToolExecutor;
    use vaultgate_domain::{ResolvedSecrets, ToolError, ToolResult, ValidatedCall};

    struct NullExecutor {
        name: &'static str,
    }

    #[async_trait]
    impl ToolExecutor for NullExecutor {
        fn name(&self) -> &str {
            self.name
        }

        async fn execute(&self, call: &ValidatedCall, _secrets: &ResolvedSecrets) -> ToolResult {
            ToolResult::failure(call.name(), ToolError::execution_failed("null"))
        }
    }

    fn full_table() -> ExecutorTable {
        ExecutorTable::new()
            .register(Arc::new(NullExecutor {
                name: "get_current_weather",
            }))
            .register(Arc::new(NullExecutor {
                name: "get_protected_status",
            }))
            .register(Arc::new(NullExecutor {
                name: "list_available_services",
            }))
    }

    #[test]
    fn test_default_config_builds() {
        let spec = build_registry(&FileConfig::default(), &full_table()).unwrap();

        assert_eq!(spec.len(), 3);
        let weather = spec.get("get_current_weather").unwrap();
        assert_eq!(weather.secrets.len(), 1);
        assert_eq!(weather.secrets[0].name, "api_key");
    }

    #[test]
    fn test_missing_description_fails_fast() {
        let mut config = FileConfig::default();
        config
            .tools
            .get_mut("get_current_weather")
            .unwrap()
            .description = String::new();

        let error = build_registry(&config, &full_table()).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::MissingField { ref field, .. } if field == "description"
        ));
    }

    #[test]
    fn test_secret_without_source_fails_fast() {
        let mut config = FileConfig::default();
        config
            .tools
            .get_mut("get_current_weather")
            .unwrap()
            .secrets = vec![FileSecretConfig {
            name: "api_key".to_string(),
            env: None,
            item: None,
            field: None,
        }];

        let error = build_registry(&config, &full_table()).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidSecret { .. }));
    }

    #[test]
    fn test_unknown_param_type_fails_fast() {
        let mut config = FileConfig::default();
        config
            .tools
            .get_mut("get_current_weather")
            .unwrap()
            .parameters
            .push(FileToolParameter {
                name: "count".to_string(),
                description: String::new(),
                required: false,
                param_type: "decimal".to_string(),
            });

        let error = build_registry(&config, &full_table()).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidParameterType { .. }));
    }

    #[test]
    fn test_unbound_executor_fails_fast() {
        let table = ExecutorTable::new().register(Arc::new(NullExecutor {
            name: "get_current_weather",
        }));

        let error = build_registry(&FileConfig::default(), &table).unwrap_err();
        assert!(matches!(error, ConfigError::UnboundExecutor(_)));
    }

    #[test]
    fn test_item_without_field_is_not_a_vault_ref() {
        let requirement = build_requirement(&FileSecretConfig {
            name: "api_key".to_string(),
            env: Some("KEY".to_string()),
            item: Some("WeatherAPI".to_string()),
            field: None,
        });

        assert!(requirement.vault.is_none());
        assert!(requirement.validate().is_ok());
    }
}
