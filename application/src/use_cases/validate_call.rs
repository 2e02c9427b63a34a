//! Validation gate use case.
//!
//! The entry point of the trust-boundary pipeline: every request the
//! reasoning component emits passes through [`ValidationGate::validate`]
//! before anything else happens. The gate is pure — it never touches
//! secrets and never dispatches — so it is safe to run on fully untrusted
//! input.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;
use vaultgate_domain::{
    RejectionReason, ToolCallRequest, ToolDefinition, ToolSpec, ValidatedCall, validate_call,
};

/// Accepts a requested tool call and checks it against the catalog:
/// name allow-listed, arguments schema-valid. Rejects anything else.
///
/// Holds the immutable [`ToolSpec`] as an explicit dependency (no global
/// state) plus an optional allow-list subset restricting which catalog
/// entries this caller may use and see advertised.
pub struct ValidationGate {
    spec: Arc<ToolSpec>,
    allowed: Option<HashSet<String>>,
}

impl ValidationGate {
    pub fn new(spec: Arc<ToolSpec>) -> Self {
        Self {
            spec,
            allowed: None,
        }
    }

    /// Restrict the gate to a subset of the catalog. An empty list means
    /// no restriction (all registered tools allowed).
    pub fn with_allowed_tools<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: HashSet<String> = names.into_iter().map(Into::into).collect();
        self.allowed = if set.is_empty() { None } else { Some(set) };
        self
    }

    /// Validate a request. On success the returned [`ValidatedCall`] is
    /// the only form in which the call may reach the broker.
    pub fn validate(&self, request: &ToolCallRequest) -> Result<ValidatedCall, RejectionReason> {
        let Some(definition) = self.spec.get(&request.name) else {
            debug!(tool = %request.name, "rejected: unknown tool");
            return Err(RejectionReason::UnknownTool {
                name: request.name.clone(),
            });
        };

        if let Some(allowed) = &self.allowed
            && !allowed.contains(&request.name)
        {
            debug!(tool = %request.name, "rejected: not in allow-list subset");
            return Err(RejectionReason::NotAllowed {
                name: request.name.clone(),
            });
        }

        validate_call(request, definition).inspect_err(|reason| {
            debug!(tool = %request.name, %reason, "rejected: invalid arguments");
        })
    }

    /// Tools this gate advertises to the reasoning component, sorted by
    /// name and filtered by the allow-list subset.
    pub fn advertised_tools(&self) -> Vec<&ToolDefinition> {
        let mut tools: Vec<&ToolDefinition> = self
            .spec
            .all()
            .filter(|tool| {
                self.allowed
                    .as_ref()
                    .is_none_or(|allowed| allowed.contains(&tool.name))
            })
            .collect();
        tools.sort_by_key(|tool| &tool.name);
        tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultgate_domain::ToolParameter;

    fn test_spec() -> Arc<ToolSpec> {
        Arc::new(
            ToolSpec::new()
                .register(
                    ToolDefinition::new("get_current_weather", "Current weather", "weather")
                        .with_parameter(ToolParameter::new("location", "City name", true)),
                )
                .register(ToolDefinition::new(
                    "list_available_services",
                    "List services",
                    "services",
                )),
        )
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let gate = ValidationGate::new(test_spec());
        let request = ToolCallRequest::new("delete_everything");

        assert_eq!(
            gate.validate(&request),
            Err(RejectionReason::UnknownTool {
                name: "delete_everything".to_string()
            })
        );
    }

    #[test]
    fn test_missing_required_argument_rejected() {
        let gate = ValidationGate::new(test_spec());
        let request = ToolCallRequest::new("get_current_weather");

        match gate.validate(&request) {
            Err(RejectionReason::InvalidArguments { field, .. }) => assert_eq!(field, "location"),
            other => panic!("expected InvalidArguments, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let gate = ValidationGate::new(test_spec());
        let request = ToolCallRequest::new("get_current_weather").with_arg("location", "Tokyo");

        let validated = gate.validate(&request).unwrap();
        assert_eq!(validated.name(), "get_current_weather");
    }

    #[test]
    fn test_allow_list_subset_enforced() {
        let gate =
            ValidationGate::new(test_spec()).with_allowed_tools(["list_available_services"]);

        let request = ToolCallRequest::new("get_current_weather").with_arg("location", "Tokyo");
        assert_eq!(
            gate.validate(&request),
            Err(RejectionReason::NotAllowed {
                name: "get_current_weather".to_string()
            })
        );

        let allowed = ToolCallRequest::new("list_available_services");
        assert!(gate.validate(&allowed).is_ok());
    }

    #[test]
    fn test_advertised_tools_respects_subset() {
        let gate = ValidationGate::new(test_spec());
        let names: Vec<_> = gate.advertised_tools().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["get_current_weather", "list_available_services"]);

        let restricted =
            ValidationGate::new(test_spec()).with_allowed_tools(["list_available_services"]);
        let names: Vec<_> = restricted
            .advertised_tools()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["list_available_services"]);
    }

    #[test]
    fn test_empty_allow_list_means_unrestricted() {
        let gate = ValidationGate::new(test_spec()).with_allowed_tools(Vec::<String>::new());
        let request = ToolCallRequest::new("get_current_weather").with_arg("location", "Tokyo");
        assert!(gate.validate(&request).is_ok());
    }
}
