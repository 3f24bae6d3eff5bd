use thiserror::Error;

use crate::claims::SessionWindowError;

/// Authentication failures.
///
/// Every variant is request-scoped and terminal; there is no retry policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer token was presented.
    #[error("authentication required")]
    MissingToken,

    /// Signature, encoding, or time-window check failed.
    #[error("invalid or expired token: {0}")]
    InvalidOrExpiredToken(String),

    /// The token is genuine but names a user that does not exist.
    #[error("user not found")]
    UserNotFound,

    /// No user matches the submitted credential pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The token could not be signed.
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl From<SessionWindowError> for AuthError {
    fn from(value: SessionWindowError) -> Self {
        Self::InvalidOrExpiredToken(value.to_string())
    }
}
