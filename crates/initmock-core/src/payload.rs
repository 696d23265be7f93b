//! Launch payload assembly and query-string encoding.
//!
//! [`InitData`] is an ordered set of named string fields. Emission order is
//! insertion order; only the data-check-string is sorted. Values are
//! percent-encoded with an empty safe set: every character outside RFC 3986
//! unreserved (`ALPHA / DIGIT / - _ . ~`) is escaped, including `/` and
//! `:`. Field names are never encoded.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::canonical;
use crate::errors::{InitDataError, InitResult};

pub use crate::canonical::HASH_FIELD;

/// Query-string field names, in emission order.
pub const USER_FIELD: &str = "user";
pub const CHAT_TYPE_FIELD: &str = "chat_type";
pub const AUTH_DATE_FIELD: &str = "auth_date";

/// Escape everything outside RFC 3986 unreserved characters.
const VALUE_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// An ordered set of named string fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InitData {
    fields: Vec<(String, String)>,
}

impl InitData {
    /// Build from name/value pairs, preserving order.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }

    /// Return a copy extended with one more trailing field.
    pub fn with_field(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut fields = self.fields.clone();
        fields.push((name.into(), value.into()));
        Self { fields }
    }

    /// All fields in insertion order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// First value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The canonical byte string the signer consumes (`hash` excluded).
    pub fn data_check_string(&self) -> String {
        canonical::data_check_string(self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str())))
    }

    /// Render the ampersand-joined wire form with percent-encoded values.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<String> = self
            .fields
            .iter()
            .map(|(name, value)| format!("{name}={}", utf8_percent_encode(value, VALUE_ESCAPES)))
            .collect();
        pairs.join("&")
    }

    /// Re-extract fields from a wire-form payload.
    ///
    /// Splits on `&` and the first `=` of each pair, percent-decoding the
    /// value. Empty segments (trailing `&`) are tolerated.
    pub fn parse(raw: &str) -> InitResult<Self> {
        let mut fields = Vec::new();
        for pair in raw.split('&').filter(|s| !s.is_empty()) {
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| InitDataError::invalid_argument(format!("field without '=': {pair}")))?;
            let decoded = percent_decode_str(value)
                .decode_utf8()
                .map_err(|e| InitDataError::encoding(format!("field {name}: {e}")))?;
            fields.push((name.to_string(), decoded.into_owned()));
        }
        Ok(Self { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn emission_preserves_insertion_order() {
        let data = InitData::from_pairs([("b", "2"), ("a", "1")]);
        assert_eq!(data.to_query_string(), "b=2&a=1");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let data = InitData::from_pairs([("u", "https://example.com/cat.jpeg")]);
        assert_eq!(
            data.to_query_string(),
            "u=https%3A%2F%2Fexample.com%2Fcat.jpeg"
        );
    }

    #[test]
    fn unreserved_characters_pass_through() {
        let data = InitData::from_pairs([("k", "Ab9-_.~")]);
        assert_eq!(data.to_query_string(), "k=Ab9-_.~");
    }

    #[test]
    fn separator_characters_survive_the_round_trip() {
        let data = InitData::from_pairs([("k", "a&b=c/d e")]);
        let wire = data.to_query_string();
        assert_eq!(wire, "k=a%26b%3Dc%2Fd%20e");
        let back = InitData::parse(&wire).unwrap();
        assert_eq!(back.get("k"), Some("a&b=c/d e"));
    }

    #[test]
    fn non_ascii_values_survive_the_round_trip() {
        let data = InitData::from_pairs([("name", "Иван")]);
        let back = InitData::parse(&data.to_query_string()).unwrap();
        assert_eq!(back.get("name"), Some("Иван"));
    }

    #[test]
    fn parse_rejects_pair_without_equals() {
        let err = InitData::parse("user").unwrap_err();
        assert_matches!(err, InitDataError::InvalidArgument { .. });
    }

    #[test]
    fn parse_rejects_invalid_utf8_escapes() {
        let err = InitData::parse("k=%ff%fe").unwrap_err();
        assert_matches!(err, InitDataError::Encoding { .. });
    }

    #[test]
    fn parse_tolerates_trailing_ampersand() {
        let data = InitData::parse("a=1&b=2&").unwrap();
        assert_eq!(data.fields().len(), 2);
    }

    #[test]
    fn data_check_string_skips_hash() {
        let data = InitData::from_pairs([("b", "2"), ("a", "1")]).with_field(HASH_FIELD, "ff");
        assert_eq!(data.data_check_string(), "a=1\nb=2");
    }

    #[test]
    fn with_field_leaves_the_original_untouched() {
        let signable = InitData::from_pairs([("a", "1")]);
        let emitted = signable.with_field(HASH_FIELD, "ff");
        assert_eq!(signable.fields().len(), 1);
        assert_eq!(emitted.fields().len(), 2);
        assert_eq!(emitted.get(HASH_FIELD), Some("ff"));
    }
}
