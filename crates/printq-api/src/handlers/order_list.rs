//! Order listing (admin-gated).

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::auth::models::AdminContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    responses(
        (status = 200, description = "All orders, most recent first, each with its files", body = serde_json::Value),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    _admin: AdminContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let orders = state.orders.list().await?;

    Ok(Json(orders))
}
