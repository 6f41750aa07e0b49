//! HTTP request handlers, one module per operation.

pub mod auth;
pub mod order_create;
pub mod order_delete;
pub mod order_get;
pub mod order_list;
pub mod order_status;

use serde::Serialize;
use utoipa::ToSchema;

/// Minimal `{message}` envelope used by mutation endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
