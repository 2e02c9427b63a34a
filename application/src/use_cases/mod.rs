//! Use cases — the pipeline steps
//!
//! ```text
//! ToolCallRequest ──▶ ValidationGate ──▶ SecretsBroker ──▶ ToolResult
//!                        (reject)          │
//!                                          ├─ SecretResolver (per requirement)
//!                                          ├─ ExecutorTable dispatch
//!                                          └─ scrub
//! ```

pub mod resolve_secret;
pub mod run_tool;
pub mod validate_call;

pub use resolve_secret::SecretResolver;
pub use run_tool::SecretsBroker;
pub use validate_call::ValidationGate;
