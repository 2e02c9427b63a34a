//! Resolved secret material
//!
//! [`SecretValue`] wraps a resolved credential so it cannot leak through
//! `Debug`/`Display` formatting, and zeroes its backing memory on drop.
//! [`ResolvedSecrets`] is the per-call map handed to exactly one executor;
//! it lives only inside a single broker run and is never serialized.

use std::collections::HashMap;

use zeroize::Zeroizing;

use super::scrub::REDACTION_MARKER;

/// A resolved secret value.
///
/// No `Serialize` impl on purpose; the only way to read the literal value
/// is [`expose`](Self::expose), which keeps accidental formatting or
/// logging from ever printing it.
#[derive(Clone)]
pub struct SecretValue(Zeroizing<String>);

impl SecretValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// The literal value. Callers are inside the trusted zone by
    /// definition; the result must never be stored beyond the current
    /// call.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTION_MARKER)
    }
}

impl std::fmt::Display for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTION_MARKER)
    }
}

impl PartialEq for SecretValue {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl Eq for SecretValue {}

/// Logical secret name → resolved value, for one tool call.
///
/// Owned exclusively by the broker for the duration of a single `run`;
/// dropped (and zeroized) once the call completes.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSecrets {
    values: HashMap<String, SecretValue>,
}

impl ResolvedSecrets {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: SecretValue) {
        self.values.insert(name.into(), value);
    }

    /// Look up a secret by its logical name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(SecretValue::expose)
    }

    /// Literal values, for the scrubber.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.values().map(SecretValue::expose)
    }

    /// Logical names only — safe to log.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
