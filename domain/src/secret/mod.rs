//! Secret domain module
//!
//! Everything the pipeline knows about credentials without touching any
//! secret store: where a secret comes from ([`SecretRequirement`], the
//! env-then-vault priority union), what resolved material looks like
//! ([`SecretValue`], [`ResolvedSecrets`]), and how output is redacted
//! before it leaves the trusted zone ([`scrub`]).
//!
//! Actual resolution (environment reads, vault lookups) lives behind the
//! application layer's `SecretStorePort` — this module is pure.

pub mod material;
pub mod requirement;
pub mod scrub;

pub use material::{ResolvedSecrets, SecretValue};
pub use requirement::{
    InvalidRequirement, ResolutionError, SecretRequirement, SecretSource, VaultRef,
};
pub use scrub::{REDACTION_MARKER, scrub};
