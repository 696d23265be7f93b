//! Error types for initmock-core.
//!
//! All fallible core operations return [`InitResult`]. Variants carry a
//! plain message; constructors keep call sites short.

use thiserror::Error;

/// Result alias used across the crate.
pub type InitResult<T> = Result<T, InitDataError>;

#[derive(Debug, Error)]
pub enum InitDataError {
    /// Secret file absent, or present without a usable token.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Bytes could not be consumed during hashing or percent-decoding.
    #[error("encoding error: {message}")]
    Encoding { message: String },

    /// A record could not be rendered to its wire form.
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// Caller-provided input outside the accepted shape.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl InitDataError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
