//! Audit logging adapters

mod jsonl;

pub use jsonl::JsonlAuditLogger;
