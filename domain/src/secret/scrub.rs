//! Output scrubbing — redaction of secret literals
//!
//! Every literal secret value used in the current call is replaced with
//! [`REDACTION_MARKER`] before output crosses the trust boundary. The
//! broker runs this unconditionally on success and failure paths, on
//! content and error text alike.
//!
//! # Known limitation
//!
//! Matching is exact-substring only. A secret the origin system re-encodes
//! (base64, URL-escaped, split across lines, case-transformed) will not be
//! caught. This is an accepted gap of the design, not an oversight; see
//! DESIGN.md.

/// Fixed marker substituted for every secret occurrence.
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Replace every exact occurrence of every non-empty secret value in
/// `raw` with the redaction marker.
pub fn scrub<'a>(raw: &str, values: impl Iterator<Item = &'a str>) -> String {
    let mut scrubbed = raw.to_string();
    for value in values {
        if !value.is_empty() {
            scrubbed = scrubbed.replace(value, REDACTION_MARKER);
        }
    }
    scrubbed
}
