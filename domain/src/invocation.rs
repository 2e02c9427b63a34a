//! Invocation-scoped context

use serde::{Deserialize, Serialize};

/// Caller-supplied parameters for one invocation or one chat session.
///
/// Carries the vault identifier that vault-backed secret requirements
/// resolve against, plus whatever invocation-scoped data the caller wants
/// to thread through (session id, chosen model). Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeContext {
    /// Vault identifier for vault-backed requirements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault: Option<String>,
    /// Session id, if the caller runs a chat session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Model chosen by the caller, for audit correlation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl RuntimeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vault(mut self, vault: impl Into<String>) -> Self {
        self.vault = Some(vault.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// The vault identifier, if one was supplied and is non-empty.
    pub fn vault(&self) -> Option<&str> {
        self.vault.as_deref().filter(|v| !v.is_empty())
    }
}
