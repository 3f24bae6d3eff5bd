use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cart_api_core::Username;

/// Session token claims.
///
/// Serialized with the registered `iat`/`exp` names as seconds since the
/// epoch, so tokens stay readable by ordinary JWT tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Login name of the authenticated user.
    pub username: Username,

    /// Issued-at timestamp.
    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Claims for a session opened at `issued_at` that lasts `ttl`.
    ///
    /// `None` when the expiry falls outside the representable calendar.
    pub fn new(username: Username, issued_at: DateTime<Utc>, ttl: chrono::Duration) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(ttl)?;
        Some(Self {
            username,
            issued_at,
            expires_at,
        })
    }

    /// Whether the session is usable at `now`.
    ///
    /// The window is `[iat, exp)`: usable from the issue second, lapsed from
    /// the expiry second on. No leeway. Signature checks live in [`crate::jwt`].
    pub fn check_window(&self, now: DateTime<Utc>) -> Result<(), SessionWindowError> {
        match (self.issued_at, self.expires_at) {
            (iat, exp) if exp <= iat => Err(SessionWindowError::Empty),
            (iat, _) if now < iat => Err(SessionWindowError::IssuedAhead),
            (_, exp) if now >= exp => Err(SessionWindowError::Lapsed { expired_at: exp.timestamp() }),
            _ => Ok(()),
        }
    }
}

/// Why a session's `[iat, exp)` window rejects the current instant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionWindowError {
    #[error("session lapsed at {expired_at}")]
    Lapsed { expired_at: i64 },

    #[error("session issued ahead of the server clock")]
    IssuedAhead,

    #[error("session window is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn claims() -> SessionClaims {
        SessionClaims::new(Username::new("jon"), at(1_000), Duration::hours(1)).unwrap()
    }

    #[test]
    fn usable_from_issue_until_just_before_expiry() {
        assert_eq!(claims().check_window(at(1_000)), Ok(()));
        assert_eq!(claims().check_window(at(4_599)), Ok(()));
    }

    #[test]
    fn lapses_at_and_after_exp() {
        let lapsed = Err(SessionWindowError::Lapsed { expired_at: 4_600 });
        assert_eq!(claims().check_window(at(4_600)), lapsed);
        assert_eq!(claims().check_window(at(90_000)), lapsed);
    }

    #[test]
    fn rejects_sessions_issued_ahead_and_empty_windows() {
        assert_eq!(claims().check_window(at(999)), Err(SessionWindowError::IssuedAhead));

        let empty = SessionClaims::new(Username::new("jon"), at(1_000), Duration::zero()).unwrap();
        assert_eq!(empty.check_window(at(1_000)), Err(SessionWindowError::Empty));
    }

    #[test]
    fn expiry_past_the_calendar_is_refused() {
        let huge = Duration::try_seconds(i64::MAX / 1_000).unwrap();
        assert_eq!(SessionClaims::new(Username::new("jon"), at(1_000), huge), None);
    }

    #[test]
    fn claims_use_registered_names_on_the_wire() {
        let json = serde_json::to_value(claims()).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "jon", "iat": 1_000, "exp": 4_600 }));
    }
}
