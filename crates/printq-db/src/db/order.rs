//! Order repository
//!
//! Owns the `orders` and `order_files` tables. The multi-row create runs in
//! a single transaction; a dropped `sqlx::Transaction` rolls back, so every
//! early return on the error path leaves no partial order behind.

use std::collections::HashMap;

use printq_core::models::{
    CreateOrderRequest, Order, OrderFile, OrderFileResponse, OrderWithFiles, DEFAULT_STATUS,
};
use printq_core::validation::validate_order_file;
use printq_core::AppError;
use sqlx::{PgPool, Postgres};

#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomically persist an order and its file metadata.
    ///
    /// Either the order row and every file row land together, or none do.
    /// A duplicate `order_id` surfaces as `InvalidInput`; the existing order
    /// is left untouched.
    #[tracing::instrument(skip(self, request), fields(db.table = "orders", db.operation = "insert"))]
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<String, AppError> {
        let status = request
            .status
            .clone()
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                order_id, full_name, phone_number, print_type, binding_color_type,
                copies, paper_size, print_side, selected_pages, color_pages,
                bw_pages, special_instructions, order_date, status, total_cost
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(&request.order_id)
        .bind(&request.full_name)
        .bind(&request.phone_number)
        .bind(&request.print_type)
        .bind(&request.binding_color_type)
        .bind(request.copies)
        .bind(&request.paper_size)
        .bind(&request.print_side)
        .bind(&request.selected_pages)
        .bind(&request.color_pages)
        .bind(&request.bw_pages)
        .bind(&request.special_instructions)
        .bind(request.order_date)
        .bind(&status)
        .bind(request.total_cost)
        .execute(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::InvalidInput(
                format!("Order {} already exists", request.order_id),
            ),
            _ => {
                tracing::error!(error = %e, order_id = %request.order_id, "Failed to insert order");
                AppError::Database(e)
            }
        })?;

        for file in &request.files {
            validate_order_file(file)?;
            sqlx::query(
                r#"
                INSERT INTO order_files (order_id, file_name, file_size, file_type, file_path)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(&request.order_id)
            .bind(&file.name)
            .bind(file.size)
            .bind(&file.file_type)
            .bind(&file.path)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    order_id = %request.order_id,
                    file_name = %file.name,
                    "Failed to insert order file"
                );
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            order_id = %request.order_id,
            file_count = request.files.len(),
            "Order created"
        );

        Ok(request.order_id.clone())
    }

    /// Fetch one order with its files in insertion order.
    #[tracing::instrument(skip(self), fields(db.table = "orders", db.operation = "select"))]
    pub async fn get(&self, order_id: &str) -> Result<Option<OrderWithFiles>, AppError> {
        let order = sqlx::query_as::<Postgres, Order>("SELECT * FROM orders WHERE order_id = $1")
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, order_id = %order_id, "Failed to fetch order");
                AppError::Database(e)
            })?;

        let Some(order) = order else {
            return Ok(None);
        };

        let files = sqlx::query_as::<Postgres, OrderFile>(
            "SELECT * FROM order_files WHERE order_id = $1 ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, order_id = %order_id, "Failed to fetch order files");
            AppError::Database(e)
        })?;

        Ok(Some(OrderWithFiles {
            order,
            files: files.into_iter().map(OrderFileResponse::from).collect(),
        }))
    }

    /// List all orders, most recent first, each with its file list.
    ///
    /// Read-only aggregation: orders and files are fetched in one query each
    /// and merged here rather than joined in SQL.
    #[tracing::instrument(skip(self), fields(db.table = "orders", db.operation = "select"))]
    pub async fn list(&self) -> Result<Vec<OrderWithFiles>, AppError> {
        let orders =
            sqlx::query_as::<Postgres, Order>("SELECT * FROM orders ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Failed to list orders");
                    AppError::Database(e)
                })?;

        let files = sqlx::query_as::<Postgres, OrderFile>("SELECT * FROM order_files ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to list order files");
                AppError::Database(e)
            })?;

        let mut files_by_order: HashMap<String, Vec<OrderFileResponse>> = HashMap::new();
        for file in files {
            files_by_order
                .entry(file.order_id.clone())
                .or_default()
                .push(OrderFileResponse::from(file));
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let files = files_by_order.remove(&order.order_id).unwrap_or_default();
                OrderWithFiles { order, files }
            })
            .collect())
    }

    /// Set an order's status and refresh its update timestamp.
    ///
    /// Any status string is accepted. Returns false when no order matched.
    #[tracing::instrument(skip(self), fields(db.table = "orders", db.operation = "update"))]
    pub async fn update_status(&self, order_id: &str, status: &str) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE orders SET status = $1, updated_at = NOW() WHERE order_id = $2")
                .bind(status)
                .bind(order_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, order_id = %order_id, "Failed to update order status");
                    AppError::Database(e)
                })?;

        if result.rows_affected() > 0 {
            tracing::info!(order_id = %order_id, status = %status, "Order status updated");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Irrevocably delete every order and all attached file metadata.
    ///
    /// Files go first (dependency order; the FK cascade is the backstop).
    /// Returns the number of orders removed.
    #[tracing::instrument(skip(self), fields(db.table = "orders", db.operation = "delete"))]
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM order_files")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to delete order files");
                AppError::Database(e)
            })?;

        let result = sqlx::query("DELETE FROM orders")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to delete orders");
                AppError::Database(e)
            })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(deleted = result.rows_affected(), "All orders deleted");
        Ok(result.rows_affected())
    }
}
