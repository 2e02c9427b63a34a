//! 1Password CLI secret store adapter
//!
//! Implements [`SecretStorePort`] by shelling out to the 1Password CLI:
//! a `vault/item/field` reference becomes `op read op://vault/item/field`.
//! Supports both service-account and interactive authentication; when a
//! service-account token is available it is injected into the child
//! process environment, never logged.
//!
//! This is the only place vault secrets are fetched.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::warn;
use vaultgate_application::{SecretStoreError, SecretStorePort};
use vaultgate_domain::SecretValue;

/// Environment variable carrying the 1Password service-account token.
const SERVICE_ACCOUNT_TOKEN_VAR: &str = "OP_SERVICE_ACCOUNT_TOKEN";

/// Secret store backed by the `op` command-line client.
pub struct OpSecretStore {
    /// Binary to invoke; overridable for tests
    program: String,
    /// Service-account token injected into the child environment
    service_account_token: Option<SecretValue>,
}

impl OpSecretStore {
    /// Create a store using `op` from `PATH`, picking up
    /// `OP_SERVICE_ACCOUNT_TOKEN` from the process environment if set.
    pub fn new() -> Self {
        Self {
            program: "op".to_string(),
            service_account_token: std::env::var(SERVICE_ACCOUNT_TOKEN_VAR)
                .ok()
                .filter(|token| !token.is_empty())
                .map(SecretValue::new),
        }
    }

    /// Override the binary invoked (tests substitute a stub script).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Supply a service-account token explicitly instead of reading the
    /// process environment.
    pub fn with_service_account_token(mut self, token: impl Into<String>) -> Self {
        self.service_account_token = Some(SecretValue::new(token));
        self
    }

    /// Map a `vault/item/field` reference to the op:// URI scheme.
    fn op_uri(reference: &str) -> String {
        format!("op://{}", reference)
    }
}

impl Default for OpSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretStorePort for OpSecretStore {
    fn getenv(&self, var: &str) -> Option<String> {
        std::env::var(var).ok()
    }

    async fn read(&self, reference: &str) -> Result<String, SecretStoreError> {
        let uri = Self::op_uri(reference);
        let mut command = Command::new(&self.program);
        command.arg("read").arg(&uri);
        if let Some(token) = &self.service_account_token {
            command.env(SERVICE_ACCOUNT_TOKEN_VAR, token.expose());
        }

        let output = command.output().await.map_err(|io_error| {
            if io_error.kind() == std::io::ErrorKind::NotFound {
                SecretStoreError::Unavailable(format!(
                    "1Password CLI ('{}') not found on PATH",
                    self.program
                ))
            } else {
                SecretStoreError::Unavailable(io_error.to_string())
            }
        })?;

        if !output.status.success() {
            // stderr names the reference at worst, never a secret value.
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(reference = %reference, "1Password CLI lookup failed");
            return Err(SecretStoreError::Backend(stderr));
        }

        let secret = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if secret.is_empty() {
            return Err(SecretStoreError::NotFound {
                reference: reference.to_string(),
            });
        }
        Ok(secret)
    }
}
