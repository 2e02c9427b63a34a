//! Secrets broker use case.
//!
//! The trusted boundary of the pipeline. [`SecretsBroker::run`] is the
//! only code whose stack ever holds resolved secret values together with a
//! tool's arguments: it resolves each requirement, dispatches the bound
//! executor, and scrubs the result before anything crosses back toward the
//! validation gate.
//!
//! Nothing in here logs arguments-with-secrets or pre-scrub results, at
//! any verbosity level. Audit events carry names, outcomes, durations,
//! and sizes only.

use std::sync::Arc;
use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use vaultgate_domain::{
    ResolvedSecrets, RuntimeContext, ToolError, ToolResult, ToolSpec, ValidatedCall,
};

use crate::config::ExecutionLimits;
use crate::ports::audit_log::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::tool_executor::ExecutorTable;
use crate::use_cases::resolve_secret::SecretResolver;

/// Runs a validated call through resolve → dispatch → scrub.
///
/// One call is one sequential unit of work; concurrent calls share only
/// the read-only catalog, so independent `run` invocations need no
/// synchronization.
pub struct SecretsBroker {
    spec: Arc<ToolSpec>,
    resolver: SecretResolver,
    executors: Arc<ExecutorTable>,
    audit: Arc<dyn AuditLogger>,
    limits: ExecutionLimits,
    cancellation_token: Option<CancellationToken>,
}

impl SecretsBroker {
    pub fn new(
        spec: Arc<ToolSpec>,
        resolver: SecretResolver,
        executors: Arc<ExecutorTable>,
    ) -> Self {
        Self {
            spec,
            resolver,
            executors,
            audit: Arc::new(NoAuditLogger),
            limits: ExecutionLimits::default(),
            cancellation_token: None,
        }
    }

    pub fn with_audit_logger(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    pub fn with_limits(mut self, limits: ExecutionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute one validated call.
    ///
    /// Always returns a [`ToolResult`] — every failure mode (resolution,
    /// dispatch, timeout, cancellation) is folded into a failed result
    /// whose text has passed the scrubber.
    pub async fn run(&self, call: &ValidatedCall, context: &RuntimeContext) -> ToolResult {
        let start = Instant::now();
        self.audit.log(AuditEvent::new(
            "tool_call",
            serde_json::json!({
                "tool": call.name(),
                "call_id": call.id(),
                "session_id": context.session_id.as_deref(),
            }),
        ));

        // The gate already checked the name; a miss here means the catalog
        // and the gate disagree, which is an internal fault, not user error.
        let Some(definition) = self.spec.get(call.name()) else {
            let result = ToolResult::failure(
                call.name(),
                ToolError::internal(format!("tool '{}' missing from catalog", call.name())),
            );
            return self.finalize(result, &ResolvedSecrets::new(), start);
        };

        let secrets = match self
            .resolver
            .resolve_all(
                &definition.secrets,
                context,
                self.cancellation_token.as_ref(),
            )
            .await
        {
            Ok(secrets) => secrets,
            Err(resolution_error) => {
                warn!(tool = %call.name(), error = %resolution_error, "secret resolution failed");
                let result = ToolResult::failure(
                    call.name(),
                    ToolError::secret_unavailable(resolution_error.to_string()),
                );
                // No secrets were retained; scrub with the empty set for
                // uniformity with the success path.
                return self.finalize(result, &ResolvedSecrets::new(), start);
            }
        };

        // Cooperative cancellation point between resolution and dispatch.
        if let Some(token) = &self.cancellation_token
            && token.is_cancelled()
        {
            let result = ToolResult::failure(call.name(), ToolError::cancelled());
            return self.finalize(result, &secrets, start);
        }

        let Some(executor) = self.executors.get(&definition.executor) else {
            // ensure_bound() at load time makes this unreachable through
            // the public wiring; surface an internal error rather than
            // panicking if it happens anyway.
            warn!(tool = %call.name(), executor = %definition.executor, "executor not bound");
            let result = ToolResult::failure(
                call.name(),
                ToolError::internal("tool executor is not configured"),
            );
            return self.finalize(result, &secrets, start);
        };

        debug!(tool = %call.name(), secrets = secrets.len(), "dispatching executor");
        let dispatch = tokio::time::timeout(
            self.limits.executor_timeout,
            executor.execute(call, &secrets),
        );
        let result = match dispatch.await {
            Ok(result) => result,
            Err(_) => ToolResult::failure(call.name(), ToolError::timeout(call.name())),
        };

        // Scrub with the full resolved set regardless of dispatch outcome;
        // `secrets` drops (and zeroizes) on return.
        self.finalize(result, &secrets, start)
    }

    fn finalize(
        &self,
        result: ToolResult,
        secrets: &ResolvedSecrets,
        start: Instant,
    ) -> ToolResult {
        let result = result
            .scrubbed(secrets)
            .with_duration(start.elapsed().as_millis() as u64);
        self.audit.log(AuditEvent::new(
            "tool_result",
            serde_json::json!({
                "tool": result.tool_name.as_str(),
                "success": result.success,
                "duration_ms": result.duration_ms,
                "content_bytes": result.content.len(),
            }),
        ));
        result
    }
}
