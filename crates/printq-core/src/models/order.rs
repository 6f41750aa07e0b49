//! Order domain models and wire DTOs.
//!
//! Orders are keyed by the caller-supplied `order_id` string; the UUID `id`
//! stays internal. File rows carry metadata only — `file_path` is an opaque
//! reference into an external object store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status assigned to orders created without an explicit status.
/// The status field is an open string: any value set via the status-update
/// operation is stored as-is.
pub const DEFAULT_STATUS: &str = "pending";

/// Order row as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: Uuid,
    pub order_id: String,
    pub full_name: String,
    pub phone_number: String,
    pub print_type: String,
    pub binding_color_type: Option<String>,
    pub copies: i32,
    pub paper_size: Option<String>,
    pub print_side: Option<String>,
    pub selected_pages: Option<String>,
    pub color_pages: Option<String>,
    pub bw_pages: Option<String>,
    pub special_instructions: Option<String>,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub total_cost: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// File metadata row attached to an order. The BIGSERIAL `id` preserves
/// insertion order for reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderFile {
    pub id: i64,
    pub order_id: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub file_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One file entry in an order-creation request: `{name, size, type, path}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderFile {
    pub name: String,
    pub size: i64,
    #[serde(rename = "type")]
    pub file_type: String,
    #[serde(default)]
    pub path: Option<String>,
}

/// Order-creation request body. Field names are camelCase to match the
/// existing intake client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_id: String,
    pub full_name: String,
    pub phone_number: String,
    pub print_type: String,
    #[serde(default)]
    pub binding_color_type: Option<String>,
    #[serde(default = "default_copies")]
    pub copies: i32,
    #[serde(default)]
    pub paper_size: Option<String>,
    #[serde(default)]
    pub print_side: Option<String>,
    #[serde(default)]
    pub selected_pages: Option<String>,
    #[serde(default)]
    pub color_pages: Option<String>,
    #[serde(default)]
    pub bw_pages: Option<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_cost: Decimal,
    #[serde(default)]
    pub files: Vec<NewOrderFile>,
}

fn default_copies() -> i32 {
    1
}

/// File entry in read responses: `{name, size, type, path}`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderFileResponse {
    pub name: String,
    pub size: i64,
    #[serde(rename = "type")]
    pub file_type: String,
    pub path: Option<String>,
}

impl From<OrderFile> for OrderFileResponse {
    fn from(file: OrderFile) -> Self {
        Self {
            name: file.file_name,
            size: file.file_size,
            file_type: file.file_type,
            path: file.file_path,
        }
    }
}

/// Order merged with its files, ordered by insertion. `files` is always
/// present, empty when the order has none.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithFiles {
    #[serde(flatten)]
    pub order: Order,
    pub files: Vec<OrderFileResponse>,
}
