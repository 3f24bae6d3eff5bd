//! Lenient decoding for client-supplied identifiers.
//!
//! Identifiers are compared as exact strings. A JSON value of any other type
//! (number, bool, object, array, null) can never equal one, so it decodes to
//! `None` instead of failing the whole request body.

use serde::{Deserialize, Deserializer, de::IgnoredAny};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrOther {
    Text(String),
    Other(IgnoredAny),
}

/// `deserialize_with` helper: keep the value only if it is a JSON string.
///
/// Pair with `#[serde(default)]` so a missing field is `None` too.
pub fn string_only<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Ok(match StringOrOther::deserialize(deserializer)? {
        StringOrOther::Text(value) => Some(T::from(value)),
        StringOrOther::Other(_) => None,
    })
}
