//! The auth gate: credential check on login, token resolution on every
//! protected request.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use cart_api_core::Username;

use crate::claims::SessionClaims;
use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::jwt::{JwtValidator, TokenIssuer};

/// Default session lifetime, in seconds.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Read-only view of the user table needed for authentication.
pub trait UserDirectory: Send + Sync {
    /// First user whose stored pair matches both fields exactly.
    fn find_by_credentials(&self, username: &str, password: &str) -> Option<Username>;

    /// Whether `username` addresses a known user.
    fn contains(&self, username: &Username) -> bool;
}

impl<D> UserDirectory for Arc<D>
where
    D: UserDirectory + ?Sized,
{
    fn find_by_credentials(&self, username: &str, password: &str) -> Option<Username> {
        (**self).find_by_credentials(username, password)
    }

    fn contains(&self, username: &Username) -> bool {
        (**self).contains(username)
    }
}

/// Issues and resolves stateless session tokens.
pub struct AuthGate<D> {
    directory: D,
    issuer: Arc<dyn TokenIssuer>,
    validator: Arc<dyn JwtValidator>,
    ttl: Duration,
}

impl<D: UserDirectory> AuthGate<D> {
    pub fn new<J>(directory: D, jwt: Arc<J>, ttl: Duration) -> Self
    where
        J: TokenIssuer + JwtValidator + 'static,
    {
        Self {
            directory,
            issuer: jwt.clone(),
            validator: jwt,
            ttl,
        }
    }

    /// Exchange a credential pair for a signed token.
    pub fn issue_token(&self, credentials: &Credentials, now: DateTime<Utc>) -> Result<String, AuthError> {
        let (username, password) = credentials.pair().ok_or(AuthError::InvalidCredentials)?;

        let Some(username) = self.directory.find_by_credentials(username, password) else {
            tracing::info!(username, "login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        };

        let claims = SessionClaims::new(username.clone(), now, self.ttl)
            .ok_or_else(|| AuthError::Signing("session expiry out of range".to_string()))?;
        let token = self.issuer.issue(&claims)?;
        tracing::info!(username = %username, "session token issued");
        Ok(token)
    }

    /// Resolve a presented bearer token to a user identity.
    pub fn resolve_token(&self, token: Option<&str>, now: DateTime<Utc>) -> Result<Username, AuthError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = self.validator.validate(token, now).inspect_err(|e| {
            tracing::debug!(error = %e, "bearer token rejected");
        })?;

        if !self.directory.contains(&claims.username) {
            tracing::warn!(username = %claims.username, "token names an unknown user");
            return Err(AuthError::UserNotFound);
        }

        Ok(claims.username)
    }
}
