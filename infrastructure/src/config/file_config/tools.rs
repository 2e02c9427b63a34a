//! Tool catalog configuration from TOML (`[tools.*]` sections)
//!
//! Each `[tools.<name>]` table declares one tool: its description, the
//! executor it binds to, its parameters, and the secrets it needs.
//!
//! Example configuration:
//!
//! ```toml
//! [tools.get_current_weather]
//! description = "Get the current weather for a location"
//! executor = "get_current_weather"
//!
//! [[tools.get_current_weather.parameters]]
//! name = "location"
//! description = "City name, e.g. 'Tokyo'"
//! required = true
//!
//! [[tools.get_current_weather.secrets]]
//! name = "api_key"
//! env = "OPENWEATHER_API_KEY"
//! item = "WeatherAPI"
//! field = "api_key"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `[tools.<name>]` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolConfig {
    /// Human-readable description, advertised to the reasoning component
    pub description: String,
    /// Executor binding name
    pub executor: String,
    /// Parameter declarations
    pub parameters: Vec<FileToolParameter>,
    /// Secret requirements, in resolution order
    pub secrets: Vec<FileSecretConfig>,
}

/// One parameter declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolParameter {
    pub name: String,
    pub description: String,
    pub required: bool,
    /// "string", "number", "integer" or "boolean"
    #[serde(rename = "type")]
    pub param_type: String,
}

impl Default for FileToolParameter {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            required: false,
            param_type: "string".to_string(),
        }
    }
}

/// One secret requirement declaration.
///
/// `name` is the logical key executors use to look the value up. At least
/// one of `env` / `item`+`field` must be present — checked by the registry
/// builder, which fails the process at startup otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSecretConfig {
    /// Logical secret name (e.g., "api_key")
    pub name: String,
    /// Environment variable checked first
    pub env: Option<String>,
    /// Vault item name checked second
    pub item: Option<String>,
    /// Field within the vault item
    pub field: Option<String>,
}

/// The full `[tools]` table, keyed by tool name.
pub type FileToolsConfig = BTreeMap<String, FileToolConfig>;

/// Built-in catalog: the three tools shipped by default, so the pipeline
/// is exercisable with zero configuration.
pub fn default_tools() -> FileToolsConfig {
    let mut tools = BTreeMap::new();

    tools.insert(
        "get_current_weather".to_string(),
        FileToolConfig {
            description: "Get the current weather for a location".to_string(),
            executor: "get_current_weather".to_string(),
            parameters: vec![
                FileToolParameter {
                    name: "location".to_string(),
                    description: "City name, e.g. 'Tokyo' or 'Paris, FR'".to_string(),
                    required: true,
                    param_type: "string".to_string(),
                },
                FileToolParameter {
                    name: "format".to_string(),
                    description: "Temperature unit: 'celsius' or 'fahrenheit'".to_string(),
                    required: false,
                    param_type: "string".to_string(),
                },
            ],
            secrets: vec![FileSecretConfig {
                name: "api_key".to_string(),
                env: Some("OPENWEATHER_API_KEY".to_string()),
                item: Some("WeatherAPI".to_string()),
                field: Some("api_key".to_string()),
            }],
        },
    );

    tools.insert(
        "get_protected_status".to_string(),
        FileToolConfig {
            description: "Check the protection status of a project".to_string(),
            executor: "get_protected_status".to_string(),
            parameters: vec![FileToolParameter {
                name: "project".to_string(),
                description: "Project identifier".to_string(),
                required: true,
                param_type: "string".to_string(),
            }],
            secrets: vec![FileSecretConfig {
                name: "auth_token".to_string(),
                env: Some("INTERNAL_API_TOKEN".to_string()),
                item: Some("InternalAPI".to_string()),
                field: Some("auth_token".to_string()),
            }],
        },
    );

    tools.insert(
        "list_available_services".to_string(),
        FileToolConfig {
            description: "List the services available through this gateway".to_string(),
            executor: "list_available_services".to_string(),
            parameters: Vec::new(),
            secrets: Vec::new(),
        },
    );

    tools
}
