//! Tool executor implementations
//!
//! Concrete [`ToolExecutor`](vaultgate_application::ToolExecutor)
//! capabilities, all running inside the broker's trusted boundary.
//!
//! Security rules for executors:
//! 1. Never log secrets
//! 2. Never include secrets in return values
//! 3. Convert internal failures into failed results without exposing
//!    upstream internals

pub mod schema;
pub mod services;
pub mod status;
pub mod weather;

pub use schema::JsonSchemaToolConverter;
pub use services::ListServicesExecutor;
pub use status::ProtectedStatusExecutor;
pub use weather::WeatherExecutor;

use std::sync::Arc;
use vaultgate_application::ExecutorTable;

/// Build the executor table with every built-in capability.
///
/// This is the static name → callable mapping the registry checks tool
/// bindings against at load time.
pub fn builtin_executor_table() -> ExecutorTable {
    ExecutorTable::new()
        .register(Arc::new(WeatherExecutor::new()))
        .register(Arc::new(ProtectedStatusExecutor))
        .register(Arc::new(ListServicesExecutor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_contains_all_executors() {
        let table = builtin_executor_table();
        assert_eq!(table.len(), 3);
        assert!(table.get(weather::GET_CURRENT_WEATHER).is_some());
        assert!(table.get(status::GET_PROTECTED_STATUS).is_some());
        assert!(table.get(services::LIST_AVAILABLE_SERVICES).is_some());
    }
}
