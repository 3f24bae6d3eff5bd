//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers in this system are opaque strings taken verbatim from fixture
//! data and request bodies. Comparison is exact and case-sensitive.

use serde::{Deserialize, Serialize};

/// Identifier of a product in the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a brand in the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandId(String);

/// Login name of a user (the identity carried by session tokens).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_newtype!(ProductId);
impl_string_newtype!(BrandId);
impl_string_newtype!(Username);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_case_sensitively() {
        assert_ne!(Username::new("YellowLeopard753"), Username::new("yellowleopard753"));
        assert_eq!(ProductId::from("1"), ProductId::new(String::from("1")));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&ProductId::new("42")).unwrap();
        assert_eq!(json, "\"42\"");

        let back: Username = serde_json::from_str("\"jon\"").unwrap();
        assert_eq!(back.as_str(), "jon");
    }
}
