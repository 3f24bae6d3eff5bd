use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use cart_api_auth::AuthError;
use cart_api_core::CartError;

pub fn auth_error_to_response(err: AuthError) -> Response {
    match err {
        AuthError::MissingToken => {
            json_error(StatusCode::UNAUTHORIZED, "missing_token", "Authentication required")
        }
        AuthError::InvalidOrExpiredToken(_) => {
            json_error(StatusCode::FORBIDDEN, "invalid_token", "Invalid or expired token")
        }
        AuthError::UserNotFound => json_error(StatusCode::FORBIDDEN, "user_not_found", "User not found"),
        AuthError::InvalidCredentials => {
            json_error(StatusCode::UNAUTHORIZED, "invalid_credentials", "Invalid credentials")
        }
        AuthError::Signing(msg) => {
            tracing::error!(error = %msg, "failed to sign session token");
            internal_error()
        }
    }
}

pub fn cart_error_to_response(err: CartError) -> Response {
    match err {
        CartError::ProductNotFound(_) => product_not_found(),
        CartError::ItemNotInCart(_) => {
            json_error(StatusCode::NOT_FOUND, "item_not_in_cart", "Product not found in cart")
        }
        // The identity was valid when the middleware ran.
        CartError::UserNotFound(_) => json_error(StatusCode::FORBIDDEN, "user_not_found", "User not found"),
    }
}

pub fn product_not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "product_not_found", "Product not found")
}

/// The parser's own message stays in the logs.
pub fn json_rejection_to_response(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection.body_text(), "request body rejected");
    json_error(rejection.status(), "invalid_body", "Invalid request body")
}

pub fn internal_error() -> Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "Something broke!")
}

/// Handler for `CatchPanicLayer`: log the payload, return a generic 500.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "request handler panicked");
    internal_error()
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}
