//! Static reference data loaded once at process start.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use cart_api_core::{Brand, Product, User};

const USERS_FILE: &str = "users.json";
const BRANDS_FILE: &str = "brands.json";
const PRODUCTS_FILE: &str = "products.json";

const EMBEDDED_USERS: &str = include_str!("../fixtures/users.json");
const EMBEDDED_BRANDS: &str = include_str!("../fixtures/brands.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../fixtures/products.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Users, brands, and products as read from JSON.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
}

impl Fixtures {
    /// The fixture set compiled into the binary.
    pub fn embedded() -> Result<Self, FixtureError> {
        let fixtures = Self {
            users: parse(USERS_FILE, EMBEDDED_USERS)?,
            brands: parse(BRANDS_FILE, EMBEDDED_BRANDS)?,
            products: parse(PRODUCTS_FILE, EMBEDDED_PRODUCTS)?,
        };
        fixtures.audit("embedded");
        Ok(fixtures)
    }

    /// Load `users.json`, `brands.json` and `products.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, FixtureError> {
        let fixtures = Self {
            users: read(dir, USERS_FILE)?,
            brands: read(dir, BRANDS_FILE)?,
            products: read(dir, PRODUCTS_FILE)?,
        };
        fixtures.audit(&dir.display().to_string());
        Ok(fixtures)
    }

    /// Log what was loaded and anything the cart rules would not have produced.
    fn audit(&self, source: &str) {
        tracing::info!(
            source,
            users = self.users.len(),
            brands = self.brands.len(),
            products = self.products.len(),
            "fixtures loaded"
        );

        let mut seen = HashSet::new();
        for user in &self.users {
            if !seen.insert(user.username()) {
                tracing::warn!(username = %user.username(), "duplicate username in fixtures; first entry wins");
            }
            for item in user.cart() {
                if !self.products.iter().any(|p| p.id == item.product_id) {
                    tracing::warn!(
                        username = %user.username(),
                        product_id = %item.product_id,
                        "fixture cart references unknown product"
                    );
                }
            }
        }
    }
}

fn read<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T, FixtureError> {
    let path = dir.join(name);
    let raw = std::fs::read_to_string(&path).map_err(|source| FixtureError::Io { path, source })?;
    parse(name, &raw)
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, FixtureError> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Parse {
        name: name.to_string(),
        source,
    })
}
