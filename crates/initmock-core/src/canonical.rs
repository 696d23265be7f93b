//! Data-check-string construction.
//!
//! The data-check-string is the exact byte sequence the signer consumes:
//! every field except `hash` rendered as `name=value`, sorted bytewise
//! ascending, joined with a single LF, no trailing separator.
//!
//! Rules:
//! - the `hash` field is skipped silently, never an error
//! - values are embedded raw; `=` and newlines inside a value are not
//!   escaped, matching what the platform's verifier reconstructs
//! - identical field sets canonicalize identically regardless of input
//!   order

use itertools::Itertools;

/// Field name reserved for the authentication tag. Never signed.
pub const HASH_FIELD: &str = "hash";

/// Build the data-check-string for a set of named fields.
///
/// An empty field set (after excluding `hash`) yields an empty string.
pub fn data_check_string<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    fields
        .into_iter()
        .filter(|(name, _)| *name != HASH_FIELD)
        .map(|(name, value)| format!("{name}={value}"))
        .sorted()
        .join("\n")
}
