//! Secret requirements — where a tool's credentials come from
//!
//! A [`SecretRequirement`] declares that a tool needs a named secret and
//! how to locate it: an environment variable, a vault item/field
//! reference, or both. Resolution order is fixed — environment first,
//! vault second — and encoded in [`SecretRequirement::sources`] as an
//! ordered list of [`SecretSource`] variants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A vault item/field reference, without the vault itself.
///
/// The vault identifier is invocation-scoped and supplied by the caller's
/// [`RuntimeContext`](crate::invocation::RuntimeContext), so requirements
/// stay portable across vaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultRef {
    /// Item name within the vault (e.g., "WeatherAPI")
    pub item: String,
    /// Field name within the item (e.g., "api_key")
    pub field: String,
}

impl VaultRef {
    pub fn new(item: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            field: field.into(),
        }
    }

    /// Build the full `vault/item/field` reference passed to the secret
    /// store.
    pub fn path(&self, vault: &str) -> String {
        format!("{}/{}/{}", vault, self.item, self.field)
    }
}

/// One arm of the two-armed secret source union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource<'a> {
    /// Read an environment variable
    Env(&'a str),
    /// Look the secret up in the caller's vault
    Vault(&'a VaultRef),
}

/// Declarative statement that a tool needs a named secret.
///
/// Invariant: at least one of `env` / `vault` is present. The registry
/// loader enforces this at startup via [`validate`](Self::validate);
/// a requirement that slips through with neither source resolves to
/// [`ResolutionError::SecretNotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretRequirement {
    /// Logical name — the key executors use to look the value up
    /// (e.g., "api_key")
    pub name: String,
    /// Environment variable checked first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    /// Vault reference checked second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault: Option<VaultRef>,
}

/// A requirement that cannot be satisfied by construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidRequirement {
    #[error("secret requirement has no logical name")]
    MissingName,

    #[error("secret '{name}' declares neither an environment variable nor a vault reference")]
    NoSource { name: String },
}

impl SecretRequirement {
    /// Requirement satisfied from an environment variable only.
    pub fn from_env(name: impl Into<String>, var: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            env: Some(var.into()),
            vault: None,
        }
    }

    /// Requirement satisfied from a vault item/field only.
    pub fn from_vault(
        name: impl Into<String>,
        item: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            env: None,
            vault: Some(VaultRef::new(item, field)),
        }
    }

    /// Add a vault fallback to an env-based requirement.
    pub fn with_vault(mut self, item: impl Into<String>, field: impl Into<String>) -> Self {
        self.vault = Some(VaultRef::new(item, field));
        self
    }

    /// Check the at-least-one-source invariant. Run by the registry
    /// loader so a broken requirement fails the process at startup, not
    /// at call time.
    pub fn validate(&self) -> Result<(), InvalidRequirement> {
        if self.name.trim().is_empty() {
            return Err(InvalidRequirement::MissingName);
        }
        if self.env.is_none() && self.vault.is_none() {
            return Err(InvalidRequirement::NoSource {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Resolution attempts in fixed priority order: env first, vault
    /// second.
    pub fn sources(&self) -> Vec<SecretSource<'_>> {
        let mut sources = Vec::with_capacity(2);
        if let Some(var) = &self.env {
            sources.push(SecretSource::Env(var));
        }
        if let Some(vault_ref) = &self.vault {
            sources.push(SecretSource::Vault(vault_ref));
        }
        sources
    }
}

/// Why a secret could not be resolved.
///
/// Terminal for the tool call; never retried. Detail is limited to the
/// requirement's logical name — never an attempted value, never store
/// output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("secret '{name}': vault reference configured but no vault supplied")]
    MissingVault { name: String },

    #[error("secret '{name}': no configured source yielded a value")]
    SecretNotFound { name: String },

    #[error("secret '{name}': secret store lookup failed")]
    LookupFailed { name: String },

    #[error("secret '{name}': secret store lookup timed out")]
    Timeout { name: String },

    #[error("secret resolution cancelled")]
    Cancelled,
}

impl ResolutionError {
    /// Logical name of the requirement that failed, if any.
    pub fn secret_name(&self) -> Option<&str> {
        match self {
            Self::MissingVault { name }
            | Self::SecretNotFound { name }
            | Self::LookupFailed { name }
            | Self::Timeout { name } => Some(name),
            Self::Cancelled => None,
        }
    }
}
