use std::sync::Arc;

use axum::{Json, extract::Extension};

use cart_api_core::Brand;

use crate::app::services::AppServices;

pub async fn list_brands(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<Brand>> {
    Json(services.store.brands().to_vec())
}
