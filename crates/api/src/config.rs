//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `JWT_SECRET` - HS256 signing key for session tokens
//!
//! ## Optional
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 3000)
//! - `TOKEN_TTL_SECS` - Session token lifetime in seconds (default: 3600)
//! - `FIXTURES_DIR` - Directory holding `users.json`, `brands.json` and
//!   `products.json` (default: the fixtures compiled into the binary)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use cart_api_auth::DEFAULT_TOKEN_TTL_SECS;
use cart_api_infra::{FixtureError, Fixtures};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Session token signing secret
    pub jwt_secret: String,
    /// Session token lifetime
    pub token_ttl: chrono::Duration,
    /// Fixture directory; `None` uses the embedded fixtures
    pub fixtures_dir: Option<PathBuf>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("fixtures_dir", &self.fixtures_dir)
            .finish()
    }
}

impl ApiConfig {
    /// Defaults for everything but the secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            jwt_secret: jwt_secret.into(),
            token_ttl: chrono::Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
            fixtures_dir: None,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT_SECRET` is missing or a variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        let mut config = Self::new(jwt_secret);

        if let Some(host) = lookup("HOST") {
            config.host = host
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), format!("{e}")))?;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), format!("{e}")))?;
        }

        if let Some(ttl) = lookup("TOKEN_TTL_SECS") {
            let secs: i64 = ttl
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("TOKEN_TTL_SECS".to_string(), format!("{e}")))?;
            if secs <= 0 {
                return Err(ConfigError::InvalidEnvVar(
                    "TOKEN_TTL_SECS".to_string(),
                    "must be positive".to_string(),
                ));
            }
            config.token_ttl = chrono::Duration::try_seconds(secs).ok_or_else(|| {
                ConfigError::InvalidEnvVar("TOKEN_TTL_SECS".to_string(), "out of range".to_string())
            })?;
        }

        config.fixtures_dir = lookup("FIXTURES_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load the configured fixture set.
    pub fn load_fixtures(&self) -> Result<Fixtures, FixtureError> {
        match &self.fixtures_dir {
            Some(dir) => Fixtures::load_dir(dir),
            None => Fixtures::embedded(),
        }
    }
}
