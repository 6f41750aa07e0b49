//! Order status updates.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use printq_core::AppError;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// Any status string is accepted; the lifecycle is intentionally open.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}/status",
    tag = "orders",
    params(
        ("order_id" = String, Path, description = "Caller-supplied order id")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let updated = state.orders.update_status(&order_id, &request.status).await?;

    if !updated {
        return Err(AppError::NotFound("Order not found".to_string()).into());
    }

    Ok(Json(MessageResponse {
        message: "Order status updated successfully".to_string(),
    }))
}
