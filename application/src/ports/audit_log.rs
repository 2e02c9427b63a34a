//! Port for structured audit logging.
//!
//! Defines the [`AuditLogger`] trait for recording pipeline events
//! (tool calls and their outcomes) to a machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures an append-only
//! audit trail (JSONL). Payloads carry tool names, outcomes, durations,
//! and sizes — never argument values, result content, or secret material.

use serde_json::Value;

/// A structured audit event.
///
/// Each event has a type string and a JSON payload; the adapter adds the
/// timestamp when the record is written.
pub struct AuditEvent {
    /// Event type identifier (e.g., "tool_call", "tool_result").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording audit events.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible
/// to avoid disrupting the pipeline — logging failures are silently
/// ignored.
pub trait AuditLogger: Send + Sync {
    /// Record an audit event.
    fn log(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLogger;

impl AuditLogger for NoAuditLogger {
    fn log(&self, _event: AuditEvent) {}
}
