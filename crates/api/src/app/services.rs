use std::sync::Arc;

use cart_api_auth::{AuthGate, Hs256Jwt};
use cart_api_infra::{CartStore, Fixtures, InMemoryStore};

use crate::config::ApiConfig;

pub type Gate = AuthGate<Arc<InMemoryStore>>;

/// Everything the handlers need, built once at startup.
pub struct AppServices {
    pub store: Arc<InMemoryStore>,
    pub gate: Gate,
    pub carts: CartStore,
}

impl AppServices {
    pub fn new(config: &ApiConfig, fixtures: Fixtures) -> Self {
        let store = Arc::new(InMemoryStore::new(fixtures));
        let jwt = Arc::new(Hs256Jwt::new(config.jwt_secret.as_bytes()));

        Self {
            gate: AuthGate::new(store.clone(), jwt, config.token_ttl),
            carts: CartStore::new(store.clone()),
            store,
        }
    }
}
