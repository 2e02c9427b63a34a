//! Tool executor port and dispatch table
//!
//! A [`ToolExecutor`] is one concrete external capability (an HTTP call,
//! an internal API query). The [`ExecutorTable`] is the static name →
//! executor mapping built once at startup; tool definitions bind to an
//! executor by name, and the binding is checked at registry-load time via
//! [`ExecutorTable::ensure_bound`].
//!
//! Least privilege holds inside the trusted zone too: an executor receives
//! only the validated arguments and the secrets resolved for *its* call,
//! never the full secret set of other tools.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use vaultgate_domain::{ResolvedSecrets, ToolResult, ToolSpec, ValidatedCall};

/// Port for one concrete tool capability.
///
/// Implementations live in the infrastructure layer. They must convert
/// their internal failures (HTTP errors, bad upstream payloads) into a
/// failed [`ToolResult`] rather than propagating them — whatever message
/// they produce is still scrubbed by the broker before release.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Executor binding name referenced by tool definitions
    fn name(&self) -> &str;

    /// Perform the external action.
    async fn execute(&self, call: &ValidatedCall, secrets: &ResolvedSecrets) -> ToolResult;
}

/// A tool definition references an executor with no registered
/// implementation — a configuration error, caught at load time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("tool '{tool}' references unregistered executor '{executor}'")]
pub struct UnboundExecutor {
    pub tool: String,
    pub executor: String,
}

/// Static mapping from executor name to implementation.
///
/// Built once at startup (builder-style, like the tool catalog) and
/// immutable afterwards.
#[derive(Clone, Default)]
pub struct ExecutorTable {
    executors: HashMap<String, Arc<dyn ToolExecutor>>,
}

impl ExecutorTable {
    pub fn new() -> Self {
        Self {
            executors: HashMap::new(),
        }
    }

    /// Register an executor under its own name.
    pub fn register(mut self, executor: Arc<dyn ToolExecutor>) -> Self {
        self.executors.insert(executor.name().to_string(), executor);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolExecutor>> {
        self.executors.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.executors.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }

    /// Verify every tool in the catalog binds to a registered executor.
    pub fn ensure_bound(&self, spec: &ToolSpec) -> Result<(), UnboundExecutor> {
        for tool in spec.all() {
            if !self.executors.contains_key(&tool.executor) {
                return Err(UnboundExecutor {
                    tool: tool.name.clone(),
                    executor: tool.executor.clone(),
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ExecutorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutorTable")
            .field("executors", &self.executors.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultgate_domain::{ToolDefinition, ToolError};

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

    #[test]
    fn test_register_and_lookup() {
        let table = ExecutorTable::new().register(Arc::new(NullExecutor { name: "weather" }));

        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert!(table.get("weather").is_some());
        assert!(table.get("services").is_none());
        assert!(table.names().any(|name| name == "weather"));
    }

    #[test]
    fn test_ensure_bound_catches_missing_executor() {
        let table = ExecutorTable::new().register(Arc::new(NullExecutor { name: "weather" }));
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("get_current_weather", "Weather", "weather"))
            .register(ToolDefinition::new("get_protected_status", "Status", "status"));

        let err = table.ensure_bound(&spec).unwrap_err();
        assert_eq!(err.tool, "get_protected_status");
        assert_eq!(err.executor, "status");
    }

    #[test]
    fn test_ensure_bound_passes_when_complete() {
        let table = ExecutorTable::new()
            .register(Arc::new(NullExecutor { name: "weather" }))
            .register(Arc::new(NullExecutor { name: "status" }));
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("get_current_weather", "Weather", "weather"));

        assert!(table.ensure_bound(&spec).is_ok());
    }
}
