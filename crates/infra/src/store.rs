use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cart_api_auth::UserDirectory;
use cart_api_core::{Brand, Product, ProductId, User, Username};

use crate::fixtures::Fixtures;

/// In-memory repository built once from fixtures and shared by all handlers.
///
/// Users sit behind a single lock so that each cart mutation is one
/// serialized read-modify-write. Products and brands are immutable after
/// construction. Lookups are linear scans; the first match wins.
#[derive(Debug)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    products: Vec<Product>,
    brands: Vec<Brand>,
}

impl InMemoryStore {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            users: RwLock::new(fixtures.users),
            products: fixtures.products,
            brands: fixtures.brands,
        }
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn contains_product(&self, product_id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == product_id)
    }

    /// Snapshot of the current user record.
    pub fn user(&self, username: &Username) -> Option<User> {
        self.read_users()
            .iter()
            .find(|u| u.username() == username)
            .cloned()
    }

    /// Run `f` against the live user record while holding the write lock.
    ///
    /// Returns `None` if no user has that name.
    pub fn with_user_mut<R>(&self, username: &Username, f: impl FnOnce(&mut User) -> R) -> Option<R> {
        let mut users = self.write_users();
        users.iter_mut().find(|u| u.username() == username).map(f)
    }

    // Poison is recovered: each cart rule fails before mutating or completes.
    fn read_users(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_users(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserDirectory for InMemoryStore {
    fn find_by_credentials(&self, username: &str, password: &str) -> Option<Username> {
        self.read_users()
            .iter()
            .find(|u| u.login.matches(username, password))
            .map(|u| u.username().clone())
    }

    fn contains(&self, username: &Username) -> bool {
        self.read_users().iter().any(|u| u.username() == username)
    }
}
