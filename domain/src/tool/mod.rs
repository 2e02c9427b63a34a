//! Tool domain module
//!
//! Core abstractions for the tool pipeline: what tools exist, how a
//! requested call is validated against the catalog, and what an execution
//! produces.
//!
//! ```text
//! ┌──────────────┐    ┌─────────────────┐    ┌───────────────┐    ┌────────────┐
//! │ ToolSpec     │───▶│ ToolCallRequest │───▶│ ValidatedCall │───▶│ ToolResult │
//! │ (allow-list) │    │ (untrusted)     │    │ (gate output) │    │ (scrubbed) │
//! └──────────────┘    └─────────────────┘    └───────────────┘    └────────────┘
//! ```
//!
//! [`ValidatedCall`] can only be produced by [`validation::validate_call`],
//! so a broker that accepts `ValidatedCall` cannot be handed an unchecked
//! request. [`ToolResult`] is the only type that crosses the trust boundary
//! back toward the reasoning component, and always after scrubbing.
//!
//! # Key Types
//!
//! - [`ToolSpec`] — immutable catalog of tools, the allow-list
//! - [`ToolDefinition`] — schema for a single tool (params, executor, secrets)
//! - [`ToolCallRequest`] — an untrusted invocation request
//! - [`ValidatedCall`] — a request that passed the gate
//! - [`ToolResult`] — execution outcome, scrubbed before release

pub mod entities;
pub mod validation;
pub mod value_objects;

pub use entities::{ToolCallRequest, ToolDefinition, ToolParameter, ToolSpec, ValidatedCall};
pub use validation::{RejectionReason, validate_call};
pub use value_objects::{ToolError, ToolResult};
