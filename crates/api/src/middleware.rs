use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::app::{errors, services::AppServices};
use crate::context::UserContext;

#[derive(Clone)]
pub struct AuthState {
    pub services: Arc<AppServices>,
}

/// Resolve the bearer token and attach a [`UserContext`] to the request.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers());

    let username = state
        .services
        .gate
        .resolve_token(token, Utc::now())
        .map_err(errors::auth_error_to_response)?;

    req.extensions_mut().insert(UserContext::new(username));

    Ok(next.run(req).await)
}

/// The credential word of `Authorization: <scheme> <token>`, if any.
///
/// The scheme word is not inspected, so `bearer x` and `Token x` both present
/// `x`, which then has to verify. Only a missing header, an unreadable value,
/// or a header without a second word count as "no token".
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let mut words = header.to_str().ok()?.split_whitespace();
    words.next()?;
    words.next()
}
