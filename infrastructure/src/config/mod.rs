//! Configuration loading and raw file structures

mod file_config;
mod loader;

pub use file_config::{
    FileBrokerConfig, FileConfig, FileSecretConfig, FileSecretsConfig, FileSecurityConfig,
    FileToolConfig, FileToolParameter, FileToolsConfig, default_tools,
};
pub use loader::ConfigLoader;
