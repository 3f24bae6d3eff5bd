use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use cart_api_core::{CartResult, ProductId, User};

use crate::app::{dto, errors, services::AppServices};
use crate::context::UserContext;

fn user_response(result: CartResult<User>) -> Response {
    match result {
        Ok(user) => (StatusCode::OK, Json(dto::UserResponse { user })).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<UserContext>,
) -> Response {
    user_response(services.carts.get_cart(ctx.username()))
}

pub async fn upsert_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<UserContext>,
    body: Result<Json<dto::AddCartItemRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let Some(product_id) = body.product_id else {
        tracing::info!(username = %ctx.username(), "cart upsert with a non-string productId");
        return errors::product_not_found();
    };

    user_response(services.carts.upsert_item(ctx.username(), product_id, body.quantity))
}

pub async fn set_item_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<UserContext>,
    Path(product_id): Path<String>,
    body: Result<Json<dto::UpdateQuantityRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let product_id = ProductId::new(product_id);
    user_response(
        services
            .carts
            .set_item_quantity(ctx.username(), &product_id, body.quantity),
    )
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<UserContext>,
    Path(product_id): Path<String>,
) -> Response {
    let product_id = ProductId::new(product_id);
    user_response(services.carts.remove_item(ctx.username(), &product_id))
}
