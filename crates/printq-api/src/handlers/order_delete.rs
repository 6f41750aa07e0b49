//! Bulk deletion (admin-gated).

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::auth::models::AdminContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::MessageResponse;
use crate::state::AppState;

#[utoipa::path(
    delete,
    path = "/api/orders/all",
    tag = "orders",
    responses(
        (status = 200, description = "All orders deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_all_orders(
    State(state): State<Arc<AppState>>,
    admin: AdminContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.orders.delete_all().await?;

    tracing::info!(username = %admin.username, deleted = deleted, "Bulk order deletion");

    Ok(Json(MessageResponse {
        message: "All orders deleted successfully".to_string(),
    }))
}
