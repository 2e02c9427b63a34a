//! Secret resolver use case.
//!
//! Resolves a [`SecretRequirement`] against its sources in fixed priority
//! order: environment variable first, vault lookup second, short-circuiting
//! on the first hit.
//!
//! Resolution is fresh on every invocation — there is deliberately no
//! cache. Secrets rotate, and a stale cache would both defeat rotation and
//! widen the exposure window. Failures are terminal for the call and never
//! retried.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use vaultgate_domain::{
    ResolutionError, ResolvedSecrets, RuntimeContext, SecretRequirement, SecretSource, SecretValue,
};

use crate::config::ExecutionLimits;
use crate::ports::secret_store::SecretStorePort;

/// Resolves secret requirements through the [`SecretStorePort`].
pub struct SecretResolver {
    store: Arc<dyn SecretStorePort>,
    timeout: Duration,
}

impl SecretResolver {
    pub fn new(store: Arc<dyn SecretStorePort>) -> Self {
        Self {
            store,
            timeout: ExecutionLimits::default().secret_timeout,
        }
    }

    /// Override the per-lookup timeout for vault reads.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve a single requirement.
    ///
    /// Tries each source in the requirement's fixed order. The vault arm
    /// requires a vault identifier in the context
    /// ([`ResolutionError::MissingVault`] otherwise); a store failure or
    /// timeout on that arm is terminal, not a fall-through.
    pub async fn resolve(
        &self,
        requirement: &SecretRequirement,
        context: &RuntimeContext,
    ) -> Result<SecretValue, ResolutionError> {
        for source in requirement.sources() {
            match source {
                SecretSource::Env(var) => {
                    if let Some(value) = self.store.getenv(var)
                        && !value.is_empty()
                    {
                        debug!(secret = %requirement.name, source = "env", "secret resolved");
                        return Ok(SecretValue::new(value));
                    }
                }
                SecretSource::Vault(vault_ref) => {
                    let Some(vault) = context.vault() else {
                        return Err(ResolutionError::MissingVault {
                            name: requirement.name.clone(),
                        });
                    };
                    let reference = vault_ref.path(vault);

                    let read = tokio::time::timeout(self.timeout, self.store.read(&reference));
                    match read.await {
                        Err(_) => {
                            warn!(secret = %requirement.name, "vault lookup timed out");
                            return Err(ResolutionError::Timeout {
                                name: requirement.name.clone(),
                            });
                        }
                        Ok(Err(store_error)) => {
                            warn!(secret = %requirement.name, error = %store_error, "vault lookup failed");
                            return Err(ResolutionError::LookupFailed {
                                name: requirement.name.clone(),
                            });
                        }
                        Ok(Ok(value)) if !value.is_empty() => {
                            debug!(secret = %requirement.name, source = "vault", "secret resolved");
                            return Ok(SecretValue::new(value));
                        }
                        Ok(Ok(_)) => {}
                    }
                }
            }
        }

        Err(ResolutionError::SecretNotFound {
            name: requirement.name.clone(),
        })
    }

    /// Resolve every requirement of a tool, in declaration order.
    ///
    /// Cancellation is checked cooperatively before each lookup, never
    /// mid-lookup. The first failure short-circuits; no partial state
    /// survives (the partially filled map is dropped and zeroized).
    pub async fn resolve_all(
        &self,
        requirements: &[SecretRequirement],
        context: &RuntimeContext,
        cancellation_token: Option<&CancellationToken>,
    ) -> Result<ResolvedSecrets, ResolutionError> {
        let mut resolved = ResolvedSecrets::new();
        for requirement in requirements {
            if let Some(token) = cancellation_token
                && token.is_cancelled()
            {
                return Err(ResolutionError::Cancelled);
            }
            let value = self.resolve(requirement, context).await?;
            resolved.insert(requirement.name.clone(), value);
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::secret_store::SecretStoreError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory store stub counting vault reads.
    #[derive(Default)]
    struct StubStore {
        env: HashMap<String, String>,
        vault: HashMap<String, String>,
        vault_reads: AtomicUsize,
        fail_vault: bool,
    }

    impl StubStore {
        fn with_env(mut self, var: &str, value: &str) -> Self {
            self.env.insert(var.to_string(), value.to_string());
            self
        }

        fn with_vault_entry(mut self, reference: &str, value: &str) -> Self {
            self.vault.insert(reference.to_string(), value.to_string());
            self
        }

        fn vault_reads(&self) -> usize {
            self.vault_reads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SecretStorePort for StubStore {
        fn getenv(&self, var: &str) -> Option<String> {
            self.env.get(var).cloned()
        }

        async fn read(&self, reference: &str) -> Result<String, SecretStoreError> {
            self.vault_reads.fetch_add(1, Ordering::SeqCst);
            if self.fail_vault {
                return Err(SecretStoreError::Unavailable("stub failure".to_string()));
            }
            self.vault
                .get(reference)
                .cloned()
                .ok_or_else(|| SecretStoreError::NotFound {
                    reference: reference.to_string(),
                })
        }
    }

    fn weather_requirement() -> SecretRequirement {
        SecretRequirement::from_env("api_key", "OPENWEATHER_API_KEY")
            .with_vault("WeatherAPI", "api_key")
    }

    #[tokio::test]
    async fn test_env_wins_without_touching_vault() {
        let store = Arc::new(
            StubStore::default()
                .with_env("OPENWEATHER_API_KEY", "secret123")
                .with_vault_entry("SecureTools/WeatherAPI/api_key", "vault-value"),
        );
        let resolver = SecretResolver::new(store.clone());
        let context = RuntimeContext::new().with_vault("SecureTools");

        let value = resolver
            .resolve(&weather_requirement(), &context)
            .await
            .unwrap();

        assert_eq!(value.expose(), "secret123");
        assert_eq!(store.vault_reads(), 0);
    }

    #[tokio::test]
    async fn test_vault_fallback_when_env_absent() {
        let store = Arc::new(
            StubStore::default().with_vault_entry("SecureTools/WeatherAPI/api_key", "vault-value"),
        );
        let resolver = SecretResolver::new(store.clone());
        let context = RuntimeContext::new().with_vault("SecureTools");

        let value = resolver
            .resolve(&weather_requirement(), &context)
            .await
            .unwrap();

        assert_eq!(value.expose(), "vault-value");
        assert_eq!(store.vault_reads(), 1);
    }

    #[tokio::test]
    async fn test_missing_vault_when_context_has_none() {
        let store = Arc::new(StubStore::default());
        let resolver = SecretResolver::new(store);
        let context = RuntimeContext::new();

        let error = resolver
            .resolve(&weather_requirement(), &context)
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ResolutionError::MissingVault {
                name: "api_key".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_empty_env_value_falls_through() {
        let store = Arc::new(
            StubStore::default()
                .with_env("OPENWEATHER_API_KEY", "")
                .with_vault_entry("SecureTools/WeatherAPI/api_key", "vault-value"),
        );
        let resolver = SecretResolver::new(store);
        let context = RuntimeContext::new().with_vault("SecureTools");

        let value = resolver
            .resolve(&weather_requirement(), &context)
            .await
            .unwrap();
        assert_eq!(value.expose(), "vault-value");
    }

    #[tokio::test]
    async fn test_store_failure_is_terminal() {
        let store = Arc::new(StubStore {
            fail_vault: true,
            ..Default::default()
        });
        let resolver = SecretResolver::new(store);
        let context = RuntimeContext::new().with_vault("SecureTools");

        let error = resolver
            .resolve(
                &SecretRequirement::from_vault("api_key", "WeatherAPI", "api_key"),
                &context,
            )
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ResolutionError::LookupFailed {
                name: "api_key".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent_and_uncached() {
        let store = Arc::new(
            StubStore::default().with_vault_entry("SecureTools/WeatherAPI/api_key", "vault-value"),
        );
        let resolver = SecretResolver::new(store.clone());
        let context = RuntimeContext::new().with_vault("SecureTools");
        let requirement = SecretRequirement::from_vault("api_key", "WeatherAPI", "api_key");

        let first = resolver.resolve(&requirement, &context).await.unwrap();
        let second = resolver.resolve(&requirement, &context).await.unwrap();

        assert_eq!(first.expose(), second.expose());
        // Fresh lookup each time — no hidden cache.
        assert_eq!(store.vault_reads(), 2);
    }

    #[tokio::test]
    async fn test_resolve_all_short_circuits() {
        let store = Arc::new(StubStore::default().with_env("FIRST_TOKEN", "abc"));
        let resolver = SecretResolver::new(store.clone());
        let context = RuntimeContext::new();

        let requirements = vec![
            SecretRequirement::from_env("first", "FIRST_TOKEN"),
            SecretRequirement::from_env("second", "SECOND_TOKEN"),
        ];

        let error = resolver
            .resolve_all(&requirements, &context, None)
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ResolutionError::SecretNotFound {
                name: "second".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_all_respects_cancellation() {
        let store = Arc::new(StubStore::default().with_env("FIRST_TOKEN", "abc"));
        let resolver = SecretResolver::new(store);
        let context = RuntimeContext::new();
        let token = CancellationToken::new();
        token.cancel();

        let requirements = vec![SecretRequirement::from_env("first", "FIRST_TOKEN")];
        let error = resolver
            .resolve_all(&requirements, &context, Some(&token))
            .await
            .unwrap_err();

        assert_eq!(error, ResolutionError::Cancelled);
    }
}
