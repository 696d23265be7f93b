//! Payload generation.
//!
//! Composes the crate: assemble the signable field set, canonicalize and
//! sign it, append the tag, and render the wire form. Generation is
//! all-or-nothing; on any error no partial payload exists.

use time::OffsetDateTime;

use crate::defaults;
use crate::errors::InitResult;
use crate::model::UserRecord;
use crate::payload::{InitData, AUTH_DATE_FIELD, CHAT_TYPE_FIELD, HASH_FIELD, USER_FIELD};
use crate::sign;

/// Options for a single generation call.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Custom user record; the built-in mock is used when absent.
    pub user: Option<UserRecord>,
    /// Fixed `auth_date` in unix seconds; current time when absent.
    pub auth_date: Option<i64>,
}

/// Assemble and sign the launch fields.
///
/// The signable set (`user`, `chat_type`, `auth_date`) is built first and
/// stays untouched; the returned value is a second, larger set with the
/// `hash` field appended.
pub fn build_init_data(secret: &str, opts: &GenerateOptions) -> InitResult<InitData> {
    let user = opts.user.clone().unwrap_or_else(UserRecord::mock);
    let auth_date = opts
        .auth_date
        .unwrap_or_else(|| OffsetDateTime::now_utc().unix_timestamp());

    let signable = InitData::from_pairs([
        (USER_FIELD, user.to_wire_json()?),
        (CHAT_TYPE_FIELD, defaults::CHAT_TYPE.to_string()),
        (AUTH_DATE_FIELD, auth_date.to_string()),
    ]);

    let tag = sign::sign_init_data(&signable.data_check_string(), secret)?;
    Ok(signable.with_field(HASH_FIELD, tag))
}

/// Generate the final percent-encoded payload string.
pub fn generate(secret: &str, opts: &GenerateOptions) -> InitResult<String> {
    Ok(build_init_data(secret, opts)?.to_query_string())
}
