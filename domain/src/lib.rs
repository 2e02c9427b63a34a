//! Domain layer for vaultgate
//!
//! This crate contains the pure types and logic of the trust-boundary
//! pipeline. It has no dependencies on infrastructure or I/O.
//!
//! # Core Concepts
//!
//! ## Trust boundary
//!
//! The reasoning component (an LLM) requests named actions but never
//! touches the credentials those actions need. Everything on the untrusted
//! side deals in [`ToolCallRequest`] and (scrubbed) [`ToolResult`] values;
//! resolved secret material exists only inside the broker, behind the
//! validation gate.
//!
//! ## Allow-listed execution
//!
//! [`ToolSpec`] is the immutable catalog loaded once at startup. A request
//! naming anything outside it is rejected before any secret is resolved or
//! any executor runs.

pub mod invocation;
pub mod secret;
pub mod tool;

// Re-export commonly used types
pub use invocation::RuntimeContext;
pub use secret::{
    InvalidRequirement, REDACTION_MARKER, ResolutionError, ResolvedSecrets, SecretRequirement,
    SecretSource, SecretValue, VaultRef, scrub,
};
pub use tool::{
    RejectionReason, ToolCallRequest, ToolDefinition, ToolError, ToolParameter, ToolResult,
    ToolSpec, ValidatedCall, validate_call,
};
