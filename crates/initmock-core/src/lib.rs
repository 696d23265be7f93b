//! initmock-core
//!
//! Core primitives for INITMOCK:
//! - Data-check-string canonicalization (filter, sort, join)
//! - Two-stage HMAC-SHA256 signing with a fixed domain label
//! - Mock user record model with compact wire serialization
//! - Launch payload assembly and query-string encoding

pub mod canonical;
pub mod errors;
pub mod generate;
pub mod model;
pub mod payload;
pub mod sign;

pub use crate::errors::{InitDataError, InitResult};

/// Domain separation labels.
/// These must remain stable: the receiving verifier derives its key from
/// the same literal.
pub mod domain {
    /// HMAC key for the first stage of signing-key derivation.
    pub const WEB_APP_DATA: &str = "WebAppData";
}

/// Default field values for generated payloads.
pub mod defaults {
    /// `chat_type` value emitted in every generated payload.
    pub const CHAT_TYPE: &str = "private";
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::canonical::data_check_string;
    pub use crate::generate::{build_init_data, generate, GenerateOptions};
    pub use crate::model::UserRecord;
    pub use crate::payload::InitData;
    pub use crate::sign::sign_init_data;
    pub use crate::{InitDataError, InitResult};
}
