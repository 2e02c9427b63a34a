//! Call validation — the pure logic behind the validation gate
//!
//! Validates an untrusted [`ToolCallRequest`] against a [`ToolDefinition`]
//! without any I/O. This is the only code path that can produce a
//! [`ValidatedCall`], which is in turn the only form in which a call may
//! reach the broker.
//!
//! Undeclared arguments are rejected rather than silently dropped —
//! anything the catalog does not declare must not reach an executor.

use thiserror::Error;

use super::entities::{ToolCallRequest, ToolDefinition, ValidatedCall};

/// Why the validation gate rejected a request.
///
/// These rejections never touch secrets and are safe to surface directly
/// to the reasoning component.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Tool not allowed: {name}")]
    NotAllowed { name: String },

    #[error("Invalid arguments for tool '{tool}': {reason} (field '{field}')")]
    InvalidArguments {
        tool: String,
        field: String,
        reason: String,
    },
}

/// Validate a request against the definition the catalog returned for it.
///
/// Checks, in order:
/// 1. every required parameter is present;
/// 2. every present value's JSON type matches the declared `param_type`;
/// 3. no undeclared arguments are present.
pub fn validate_call(
    request: &ToolCallRequest,
    definition: &ToolDefinition,
) -> Result<ValidatedCall, RejectionReason> {
    for param in &definition.parameters {
        match request.arguments.get(&param.name) {
            None if param.required => {
                return Err(RejectionReason::InvalidArguments {
                    tool: definition.name.clone(),
                    field: param.name.clone(),
                    reason: "missing required parameter".to_string(),
                });
            }
            Some(value) if !type_matches(&param.param_type, value) => {
                return Err(RejectionReason::InvalidArguments {
                    tool: definition.name.clone(),
                    field: param.name.clone(),
                    reason: format!("expected {}", param.param_type),
                });
            }
            _ => {}
        }
    }

    for arg_name in request.arguments.keys() {
        if definition.parameter(arg_name).is_none() {
            return Err(RejectionReason::InvalidArguments {
                tool: definition.name.clone(),
                field: arg_name.clone(),
                reason: "undeclared parameter".to_string(),
            });
        }
    }

    Ok(ValidatedCall::new(
        request.id.clone(),
        definition.name.clone(),
        request.arguments.clone(),
    ))
}

fn type_matches(param_type: &str, value: &serde_json::Value) -> bool {
    match param_type {
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        // The registry loader only admits known types; "string" is the
        // catch-all for path-like declarations.
        _ => value.is_string(),
    }
}
