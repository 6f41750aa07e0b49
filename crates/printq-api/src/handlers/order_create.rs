//! Order intake.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use printq_core::models::CreateOrderRequest;
use printq_core::validation::validate_create_order;
use serde::Serialize;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub message: String,
    pub order_id: String,
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Order created", body = serde_json::Value),
        (status = 400, description = "Validation failure or duplicate order id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    validate_create_order(&request)?;

    // The repository persists the order row and every file row in a single
    // transaction; per-file validation happens inside it so a bad file
    // mid-batch leaves nothing behind.
    let order_id = state.orders.create(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Order created successfully".to_string(),
            order_id,
        }),
    ))
}
