//! User record model.
//!
//! `UserRecord` is the launch-context user entry embedded (serialized) in
//! the `user` field. It is intentionally "dumb" data: policy, defaults,
//! and I/O live in higher layers.
//!
//! Serialization notes:
//! - wire form is compact JSON, no inserted whitespace
//! - attribute order is the declaration order below
//! - a string attribute that is empty is omitted from the wire form
//!   (indistinguishable from absent in the protocol); an explicit `false`
//!   boolean is kept. The predicate is per-field, not generic truthiness.

use serde::{Deserialize, Serialize};

use crate::errors::{InitDataError, InitResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language_code: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub allows_write_to_pm: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub photo_url: String,
}

impl UserRecord {
    /// Built-in mock record used when the caller does not supply one.
    pub fn mock() -> Self {
        Self {
            id: 687627953,
            first_name: "linuxfight".to_string(),
            last_name: String::new(),
            username: "linuxfight".to_string(),
            language_code: "ru".to_string(),
            is_premium: false,
            allows_write_to_pm: false,
            photo_url: "https://example.com/cat.jpeg".to_string(),
        }
    }

    /// Serialize to the compact wire form embedded in the `user` field.
    pub fn to_wire_json(&self) -> InitResult<String> {
        serde_json::to_string(self)
            .map_err(|e| InitDataError::serialization(format!("user record: {e}")))
    }
}
