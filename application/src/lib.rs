//! Application layer for vaultgate
//!
//! This crate contains use cases, port definitions, and execution limits.
//! It depends only on the domain layer.
//!
//! The three use cases are the pipeline: [`ValidationGate`] checks
//! untrusted requests against the catalog, [`SecretResolver`] turns
//! requirements into values through the [`SecretStorePort`], and
//! [`SecretsBroker`] ties resolution, dispatch, and scrubbing together
//! inside the trusted zone.
//!
//! [`SecretStorePort`]: ports::secret_store::SecretStorePort

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionLimits;
pub use ports::{
    audit_log::{AuditEvent, AuditLogger, NoAuditLogger},
    secret_store::{SecretStoreError, SecretStorePort},
    tool_executor::{ExecutorTable, ToolExecutor, UnboundExecutor},
    tool_schema::ToolSchemaPort,
};
pub use use_cases::{SecretResolver, SecretsBroker, ValidationGate};
