use serde::Deserialize;

use cart_api_core::lenient::string_only;

/// Login credentials as submitted by a client.
///
/// Both fields are optional at the wire level. A missing or non-string field
/// never matches any stored credential pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(default, deserialize_with = "string_only")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Both fields, if both were supplied.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.username.as_deref()?, self.password.as_deref()?))
    }
}
