use serde::{Deserialize, Serialize};

use cart_api_core::lenient::string_only;
use cart_api_core::{ProductId, User};

// -------------------------
// Request DTOs
// -------------------------

/// Login body; missing fields are treated as non-matching credentials.
pub type LoginRequest = cart_api_auth::Credentials;

/// `productId` must be a JSON string to match a catalog id; anything else
/// decodes to `None` and is reported as an unknown product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    #[serde(default, deserialize_with = "string_only")]
    pub product_id: Option<ProductId>,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}
