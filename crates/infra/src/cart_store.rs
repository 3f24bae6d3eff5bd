//! Cart operations over the shared user table.

use std::sync::Arc;

use cart_api_core::{CartError, CartResult, ProductId, User, Username};

use crate::store::InMemoryStore;

/// Cart service. Every mutation runs entirely under the store's write lock.
#[derive(Debug, Clone)]
pub struct CartStore {
    store: Arc<InMemoryStore>,
}

impl CartStore {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    /// Current state of the user, cart included.
    pub fn get_cart(&self, user: &Username) -> CartResult<User> {
        self.store
            .user(user)
            .ok_or_else(|| CartError::UserNotFound(user.clone()))
    }

    /// Add `product_id` or overwrite its quantity.
    ///
    /// Fails with [`CartError::ProductNotFound`] when the product is not in the
    /// catalog, leaving the cart unchanged.
    pub fn upsert_item(&self, user: &Username, product_id: ProductId, quantity: i64) -> CartResult<User> {
        let store = &self.store;
        let updated = store.with_user_mut(user, |u| {
            if !store.contains_product(&product_id) {
                return Err(CartError::ProductNotFound(product_id));
            }
            u.upsert_item(product_id, quantity);
            Ok(u.clone())
        });

        let user_state = updated.ok_or_else(|| CartError::UserNotFound(user.clone()))??;
        tracing::info!(username = %user, cart_len = user_state.cart.len(), "cart item upserted");
        Ok(user_state)
    }

    /// Overwrite the quantity of an item already in the cart.
    ///
    /// The catalog is deliberately not consulted here, unlike
    /// [`CartStore::upsert_item`].
    pub fn set_item_quantity(&self, user: &Username, product_id: &ProductId, quantity: i64) -> CartResult<User> {
        let updated = self.store.with_user_mut(user, |u| -> CartResult<User> {
            u.set_item_quantity(product_id, quantity)?;
            Ok(u.clone())
        });

        let user_state = updated.ok_or_else(|| CartError::UserNotFound(user.clone()))??;
        tracing::info!(username = %user, product_id = %product_id, quantity, "cart item quantity set");
        Ok(user_state)
    }

    /// Remove `product_id` from the cart; a no-op if it is absent.
    pub fn remove_item(&self, user: &Username, product_id: &ProductId) -> CartResult<User> {
        let user_state = self
            .store
            .with_user_mut(user, |u| {
                u.remove_item(product_id);
                u.clone()
            })
            .ok_or_else(|| CartError::UserNotFound(user.clone()))?;

        tracing::info!(username = %user, product_id = %product_id, "cart item removed");
        Ok(user_state)
    }
}
