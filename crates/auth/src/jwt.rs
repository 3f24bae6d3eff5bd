//! HS256 JWT signing and verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::SessionClaims;
use crate::error::AuthError;

/// Produces signed session tokens.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, claims: &SessionClaims) -> Result<String, AuthError>;
}

/// Verifies a session token and returns its claims.
///
/// Implementations must check the time window against `now` rather than the
/// wall clock so callers stay deterministic under test.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AuthError>;
}

/// HMAC-SHA256 signer/validator over a shared secret.
#[derive(Clone)]
pub struct Hs256Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256Jwt {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let secret = secret.as_ref();

        // The time window is checked by `SessionClaims::check_window` against the caller's clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl core::fmt::Debug for Hs256Jwt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hs256Jwt").field("secret", &"[REDACTED]").finish()
    }
}

impl TokenIssuer for Hs256Jwt {
    fn issue(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
}

impl JwtValidator for Hs256Jwt {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AuthError> {
        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map_err(|e| AuthError::InvalidOrExpiredToken(e.to_string()))?;

        data.claims.check_window(now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_api_core::Username;
    use chrono::Duration;

    fn claims_at(now: DateTime<Utc>) -> SessionClaims {
        SessionClaims::new(Username::new("yellowleopard753"), now, Duration::hours(1)).unwrap()
    }

    #[test]
    fn issued_token_validates_to_same_claims() {
        let jwt = Hs256Jwt::new("test-secret");
        let now = Utc::now();
        let token = jwt.issue(&claims_at(now)).unwrap();

        let claims = jwt.validate(&token, now).unwrap();
        assert_eq!(claims.username.as_str(), "yellowleopard753");
        assert_eq!(claims.expires_at - claims.issued_at, Duration::hours(1));
    }

    #[test]
    fn expired_token_is_rejected_despite_valid_signature() {
        let jwt = Hs256Jwt::new("test-secret");
        let issued = Utc::now() - Duration::hours(2);
        let token = jwt.issue(&claims_at(issued)).unwrap();

        let err = jwt.validate(&token, Utc::now()).unwrap_err();
        assert!(matches!(err, AuthError::InvalidOrExpiredToken(_)));
    }

    #[test]
    fn token_expires_exactly_at_exp() {
        let jwt = Hs256Jwt::new("test-secret");
        let claims = claims_at(Utc::now());
        let token = jwt.issue(&claims).unwrap();

        assert!(jwt.validate(&token, claims.expires_at - Duration::seconds(1)).is_ok());
        assert!(jwt.validate(&token, claims.expires_at).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let now = Utc::now();
        let token = Hs256Jwt::new("other-secret").issue(&claims_at(now)).unwrap();

        let err = Hs256Jwt::new("test-secret").validate(&token, now).unwrap_err();
        assert!(matches!(err, AuthError::InvalidOrExpiredToken(_)));
    }

    #[test]
    fn tampered_or_garbage_tokens_are_rejected() {
        let jwt = Hs256Jwt::new("test-secret");
        let now = Utc::now();
        let token = jwt.issue(&claims_at(now)).unwrap();

        let other = Hs256Jwt::new("x")
            .issue(&SessionClaims::new(Username::new("someone-else"), now, Duration::hours(1)).unwrap())
            .unwrap();
        let forged_payload = other.split('.').nth(1).unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        parts[1] = forged_payload;
        let forged = parts.join(".");

        assert!(jwt.validate(&forged, now).is_err());
        assert!(jwt.validate("not-a-jwt", now).is_err());
        assert!(jwt.validate("", now).is_err());
    }

    #[test]
    fn debug_output_redacts_secret() {
        let rendered = format!("{:?}", Hs256Jwt::new("super-secret-value"));
        assert!(!rendered.contains("super-secret-value"));
    }
}
