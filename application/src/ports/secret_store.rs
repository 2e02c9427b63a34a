//! Secret store port
//!
//! Defines the interface to the external secret store: an environment
//! lookup and a vault read keyed by a `vault/item/field` reference.
//! The production adapter (1Password CLI) lives in the infrastructure
//! layer; tests substitute in-memory stubs.

use async_trait::async_trait;
use thiserror::Error;

/// Error from the underlying secret store.
///
/// Carries the reference (names only, never a value) for diagnostics; the
/// resolver reduces this to a [`ResolutionError`] naming the requirement's
/// logical name before anything is surfaced to a caller.
///
/// [`ResolutionError`]: vaultgate_domain::ResolutionError
#[derive(Debug, Clone, Error)]
pub enum SecretStoreError {
    /// The store has no value at this reference
    #[error("no secret at reference '{reference}'")]
    NotFound { reference: String },

    /// The store itself cannot be reached (CLI missing, daemon down)
    #[error("secret store unavailable: {0}")]
    Unavailable(String),

    /// The store returned an error for this lookup
    #[error("secret store error: {0}")]
    Backend(String),
}

/// Port for secret lookups.
///
/// Two operations mirror the two arms of a
/// [`SecretRequirement`](vaultgate_domain::SecretRequirement): a
/// synchronous environment read and an asynchronous vault read. The
/// resolver applies its own timeout around [`read`](Self::read).
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Read an environment variable. `None` when absent.
    fn getenv(&self, var: &str) -> Option<String>;

    /// Read a secret at a `vault/item/field` reference.
    async fn read(&self, reference: &str) -> Result<String, SecretStoreError>;
}
