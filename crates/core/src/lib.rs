//! `cart-api-core`: domain building blocks for the cart API.
//!
//! This crate contains **pure domain** types and rules (no HTTP, no storage).

pub mod catalog;
pub mod error;
pub mod id;
pub mod lenient;
pub mod user;

pub use catalog::{Brand, Product};
pub use error::{CartError, CartResult};
pub use id::{BrandId, ProductId, Username};
pub use user::{CartItem, Login, PersonName, User};
