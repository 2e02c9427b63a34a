//! Pipeline assembly — config to a ready trust boundary
//!
//! Wires the loaded [`FileConfig`] into the full pipeline: executor table,
//! validated catalog, secret store, resolver, broker, gate, audit logger.
//! The embedding application (chat loop, service, REPL) owns everything
//! outside [`handle`](Pipeline::handle); requests go in, scrubbed results
//! or structured rejections come out.

use std::path::PathBuf;
use std::sync::Arc;

use vaultgate_application::{
    SecretResolver, SecretStorePort, SecretsBroker, ToolSchemaPort, ValidationGate,
};
use vaultgate_domain::{RejectionReason, RuntimeContext, ToolCallRequest, ToolResult};

use crate::audit::JsonlAuditLogger;
use crate::config::{ConfigLoader, FileConfig};
use crate::registry::{ConfigError, build_registry};
use crate::secrets::OpSecretStore;
use crate::tools::{JsonSchemaToolConverter, builtin_executor_table};

/// The assembled trust boundary: validation gate in front of the secrets
/// broker, sharing one immutable catalog.
pub struct Pipeline {
    gate: ValidationGate,
    broker: SecretsBroker,
    default_vault: Option<String>,
}

impl Pipeline {
    /// Load configuration from disk (explicit path, project file, XDG,
    /// defaults) and assemble the pipeline.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let config = ConfigLoader::load(config_path)?;
        Self::from_config(&config)
    }

    /// Assemble the pipeline with the production secret store (1Password
    /// CLI).
    pub fn from_config(config: &FileConfig) -> Result<Self, ConfigError> {
        Self::from_config_with_store(config, Arc::new(OpSecretStore::new()))
    }

    /// Assemble the pipeline with a caller-supplied secret store.
    pub fn from_config_with_store(
        config: &FileConfig,
        store: Arc<dyn SecretStorePort>,
    ) -> Result<Self, ConfigError> {
        let executors = Arc::new(builtin_executor_table());
        let spec = Arc::new(build_registry(config, &executors)?);
        let limits = config.execution_limits();

        let resolver = SecretResolver::new(store).with_timeout(limits.secret_timeout);
        let mut broker = SecretsBroker::new(spec.clone(), resolver, executors).with_limits(limits);
        if let Some(path) = &config.security.audit_log
            && let Some(logger) = JsonlAuditLogger::new(path)
        {
            broker = broker.with_audit_logger(Arc::new(logger));
        }

        let gate = ValidationGate::new(spec)
            .with_allowed_tools(config.security.allowed_tools.iter().cloned());

        let default_vault = Some(config.secrets.vault.clone()).filter(|v| !v.is_empty());

        Ok(Self {
            gate,
            broker,
            default_vault,
        })
    }

    /// The validation gate, for callers that want to advertise or validate
    /// separately from execution.
    pub fn gate(&self) -> &ValidationGate {
        &self.gate
    }

    /// JSON Schema for every tool this pipeline advertises, in the format
    /// the reasoning component's tool-calling protocol expects.
    pub fn advertised_schema(&self) -> Vec<serde_json::Value> {
        JsonSchemaToolConverter.tools_schema(&self.gate.advertised_tools())
    }

    /// Run one request through the full pipeline: gate, then broker.
    ///
    /// A context without a vault identifier picks up the configured
    /// default vault before resolution.
    pub async fn handle(
        &self,
        request: &ToolCallRequest,
        context: &RuntimeContext,
    ) -> Result<ToolResult, RejectionReason> {
        let call = self.gate.validate(request)?;

        let context = if context.vault().is_none()
            && let Some(vault) = &self.default_vault
        {
            context.clone().with_vault(vault.clone())
        } else {
            context.clone()
        };

        Ok(self.broker.run(&call, &context).await)
    }
}
