//! `cart-api-infra`: fixture loading, the in-memory store, and the cart
//! store service built on top of it.

pub mod cart_store;
pub mod fixtures;
pub mod store;

pub use cart_store::CartStore;
pub use fixtures::{FixtureError, Fixtures};
pub use store::InMemoryStore;
