//! Execution limits — pipeline timeout control.
//!
//! [`ExecutionLimits`] groups the static parameters that bound the two
//! external operations in a tool call: the secret-store lookup and the
//! executor dispatch. These are application-layer concerns, not domain
//! policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeouts for the blocking steps of one tool call.
///
/// A timed-out secret lookup or executor call is a terminal failure for
/// that call; no partial state is retained and nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionLimits {
    /// Timeout for a single secret-store lookup.
    pub secret_timeout: Duration,
    /// Timeout for a single executor dispatch.
    pub executor_timeout: Duration,
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self {
            secret_timeout: Duration::from_secs(30),
            executor_timeout: Duration::from_secs(60),
        }
    }
}

impl ExecutionLimits {
    pub fn with_secret_timeout(mut self, timeout: Duration) -> Self {
        self.secret_timeout = timeout;
        self
    }

    pub fn with_executor_timeout(mut self, timeout: Duration) -> Self {
        self.executor_timeout = timeout;
        self
    }
}
