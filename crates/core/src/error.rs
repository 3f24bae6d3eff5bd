//! Domain error model.

use thiserror::Error;

use crate::id::{ProductId, Username};

/// Result type used by cart operations.
pub type CartResult<T> = Result<T, CartError>;

/// Cart-level error.
///
/// All variants are terminal for the request that produced them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The product is not part of the reference catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// The cart has no line item for the product.
    #[error("product not found in cart: {0}")]
    ItemNotInCart(ProductId),

    /// The identity does not address any known user.
    #[error("user not found: {0}")]
    UserNotFound(Username),
}
