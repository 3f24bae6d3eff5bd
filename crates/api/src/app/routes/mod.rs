use axum::{
    Router,
    routing::{get, post},
};

pub mod brands;
pub mod cart;
pub mod session;
pub mod system;

/// Endpoints reachable without a token.
pub fn public_router() -> Router {
    Router::new()
        .route("/api/brands", get(brands::list_brands))
        .route("/api/login", post(session::login))
}

/// Endpoints that act on the caller's own cart.
pub fn protected_router() -> Router {
    Router::new()
        .route("/api/me/cart", get(cart::get_cart).post(cart::upsert_item))
        .route(
            "/api/me/cart/:product_id",
            post(cart::set_item_quantity).delete(cart::remove_item),
        )
}
