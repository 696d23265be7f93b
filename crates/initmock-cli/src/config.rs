//! Secret and user-record loading.
//!
//! The core crate performs no file I/O; everything read from disk lives
//! here and is passed down explicitly.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use initmock_core::model::UserRecord;
use initmock_core::InitDataError;

/// Env-file key holding the signing secret.
pub const TOKEN_KEY: &str = "BOT_TOKEN";

/// Load the bot token from a line-oriented `NAME=value` file.
///
/// The first line whose trimmed name equals `BOT_TOKEN` wins; its trimmed
/// value must be non-empty. A missing file, a missing key, or an empty
/// value is a fatal `Config` error.
pub fn load_bot_token(path: &Path) -> Result<String, InitDataError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| InitDataError::config(format!("cannot read {}: {e}", path.display())))?;

    for line in raw.lines() {
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        if name.trim() != TOKEN_KEY {
            continue;
        }
        let value = value.trim();
        if value.is_empty() {
            return Err(InitDataError::config(format!(
                "{TOKEN_KEY} is empty in {}",
                path.display()
            )));
        }
        return Ok(value.to_string());
    }

    Err(InitDataError::config(format!(
        "{TOKEN_KEY} not found in {}",
        path.display()
    )))
}

/// Read a custom user record from a JSON file.
pub fn load_user_record(path: &str) -> Result<UserRecord> {
    let raw = fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
    let user: UserRecord =
        serde_json::from_str(&raw).with_context(|| format!("invalid user record in {path}"))?;
    Ok(user)
}
