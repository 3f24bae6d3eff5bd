//! `cart-api-auth`: the authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: user lookup
//! goes through the [`UserDirectory`] trait and time is passed in explicitly.

pub mod claims;
pub mod credentials;
pub mod error;
pub mod gate;
pub mod jwt;

pub use claims::{SessionClaims, SessionWindowError};
pub use credentials::Credentials;
pub use error::AuthError;
pub use gate::{AuthGate, DEFAULT_TOKEN_TTL_SECS, UserDirectory};
pub use jwt::{Hs256Jwt, JwtValidator, TokenIssuer};
