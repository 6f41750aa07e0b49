//! Order API integration tests.
//!
//! Run with: `cargo test -p printq-api --test orders_test`
//! Requires Docker for testcontainers (Postgres).

mod helpers;

use helpers::{login_admin, setup_test_app};

fn sample_order(order_id: &str, files: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "orderId": order_id,
        "fullName": "Asha Rao",
        "phoneNumber": "9876543210",
        "printType": "color",
        "bindingColorType": "spiral",
        "copies": 2,
        "paperSize": "A4",
        "printSide": "double",
        "selectedPages": "1-10",
        "colorPages": "1,3",
        "bwPages": "2,4-10",
        "specialInstructions": "Staple top-left",
        "orderDate": "2025-06-01T10:30:00Z",
        "totalCost": 45.50,
        "files": files
    })
}

#[tokio::test]
async fn test_create_and_read_back_files_in_insertion_order() {
    let app = setup_test_app().await;

    let files = serde_json::json!([
        {"name": "chapter-1.pdf", "size": 1024, "type": "application/pdf", "path": "uploads/c1.pdf"},
        {"name": "chapter-2.pdf", "size": 2048, "type": "application/pdf", "path": "uploads/c2.pdf"},
        {"name": "cover.png", "size": 512, "type": "image/png", "path": null}
    ]);
    let response = app
        .server
        .post("/api/orders")
        .json(&sample_order("ORD-100", files))
        .await;
    assert_eq!(response.status_code(), 201);
    let body: serde_json::Value = response.json();
    assert_eq!(body["orderId"], "ORD-100");

    let response = app.server.get("/api/orders/ORD-100").await;
    assert_eq!(response.status_code(), 200);
    let order: serde_json::Value = response.json();

    assert_eq!(order["order_id"], "ORD-100");
    assert_eq!(order["status"], "pending");
    let files = order["files"].as_array().expect("files array");
    assert_eq!(files.len(), 3);
    assert_eq!(files[0]["name"], "chapter-1.pdf");
    assert_eq!(files[1]["name"], "chapter-2.pdf");
    assert_eq!(files[2]["name"], "cover.png");
    assert_eq!(files[2]["path"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_create_without_files_reads_back_empty_list() {
    let app = setup_test_app().await;

    let response = app
        .server
        .post("/api/orders")
        .json(&sample_order("ORD-101", serde_json::json!([])))
        .await;
    assert_eq!(response.status_code(), 201);

    let order: serde_json::Value = app.server.get("/api/orders/ORD-101").await.json();
    assert!(order["files"].as_array().is_some_and(|f| f.is_empty()));
}

#[tokio::test]
async fn test_duplicate_order_id_leaves_original_untouched() {
    let app = setup_test_app().await;

    let files = serde_json::json!([
        {"name": "original.pdf", "size": 100, "type": "application/pdf", "path": null}
    ]);
    let response = app
        .server
        .post("/api/orders")
        .json(&sample_order("ORD-102", files))
        .await;
    assert_eq!(response.status_code(), 201);

    // Same order_id, different content and more files.
    let mut duplicate = sample_order(
        "ORD-102",
        serde_json::json!([
            {"name": "sneaky-1.pdf", "size": 1, "type": "application/pdf", "path": null},
            {"name": "sneaky-2.pdf", "size": 1, "type": "application/pdf", "path": null}
        ]),
    );
    duplicate["fullName"] = serde_json::json!("Someone Else");
    let response = app.server.post("/api/orders").json(&duplicate).await;
    assert_eq!(response.status_code(), 400);

    let order: serde_json::Value = app.server.get("/api/orders/ORD-102").await.json();
    assert_eq!(order["full_name"], "Asha Rao");
    let files = order["files"].as_array().expect("files array");
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["name"], "original.pdf");
}

#[tokio::test]
async fn test_bad_file_mid_batch_rolls_back_whole_order() {
    let app = setup_test_app().await;

    // Second of three files is invalid; nothing from this request may land.
    let files = serde_json::json!([
        {"name": "ok-1.pdf", "size": 100, "type": "application/pdf", "path": null},
        {"name": "bad.pdf", "size": -5, "type": "application/pdf", "path": null},
        {"name": "ok-2.pdf", "size": 100, "type": "application/pdf", "path": null}
    ]);
    let response = app
        .server
        .post("/api/orders")
        .json(&sample_order("ORD-103", files))
        .await;
    assert_eq!(response.status_code(), 400);

    let response = app.server.get("/api/orders/ORD-103").await;
    assert_eq!(response.status_code(), 404);

    let file_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_files")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(file_rows, 0);
}

#[tokio::test]
async fn test_zero_copies_rejected() {
    let app = setup_test_app().await;

    let mut order = sample_order("ORD-104", serde_json::json!([]));
    order["copies"] = serde_json::json!(0);
    let response = app.server.post("/api/orders").json(&order).await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_update_status_and_not_found() {
    let app = setup_test_app().await;

    app.server
        .post("/api/orders")
        .json(&sample_order("ORD-105", serde_json::json!([])))
        .await;

    let response = app
        .server
        .patch("/api/orders/ORD-105/status")
        .json(&serde_json::json!({"status": "printing"}))
        .await;
    assert_eq!(response.status_code(), 200);

    let order: serde_json::Value = app.server.get("/api/orders/ORD-105").await.json();
    assert_eq!(order["status"], "printing");

    let response = app
        .server
        .patch("/api/orders/NO-SUCH-ORDER/status")
        .json(&serde_json::json!({"status": "printing"}))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_list_requires_token_and_orders_newest_first() {
    let app = setup_test_app().await;

    let response = app.server.get("/api/orders").await;
    assert_eq!(response.status_code(), 401);

    app.server
        .post("/api/orders")
        .json(&sample_order("ORD-106", serde_json::json!([])))
        .await;
    app.server
        .post("/api/orders")
        .json(&sample_order(
            "ORD-107",
            serde_json::json!([
                {"name": "a.pdf", "size": 10, "type": "application/pdf", "path": null}
            ]),
        ))
        .await;

    let token = login_admin(&app.server).await;
    let response = app
        .server
        .get("/api/orders")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    assert_eq!(response.status_code(), 200);

    let orders: serde_json::Value = response.json();
    let orders = orders.as_array().expect("orders array");
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["order_id"], "ORD-107");
    assert_eq!(orders[1]["order_id"], "ORD-106");
    assert_eq!(orders[0]["files"].as_array().map(|f| f.len()), Some(1));
    assert!(orders[1]["files"].as_array().is_some_and(|f| f.is_empty()));
}

#[tokio::test]
async fn test_delete_all_requires_token_then_empties_store() {
    let app = setup_test_app().await;

    app.server
        .post("/api/orders")
        .json(&sample_order(
            "ORD-108",
            serde_json::json!([
                {"name": "a.pdf", "size": 10, "type": "application/pdf", "path": null}
            ]),
        ))
        .await;

    let response = app.server.delete("/api/orders/all").await;
    assert_eq!(response.status_code(), 401);

    let token = login_admin(&app.server).await;
    let response = app
        .server
        .delete("/api/orders/all")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    assert_eq!(response.status_code(), 200);

    let response = app
        .server
        .get("/api/orders")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    let orders: serde_json::Value = response.json();
    assert!(orders.as_array().is_some_and(|o| o.is_empty()));

    let response = app.server.get("/api/orders/ORD-108").await;
    assert_eq!(response.status_code(), 404);

    // Cascade/dependency order: no orphaned file rows either.
    let file_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_files")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(file_rows, 0);
}

#[tokio::test]
async fn test_health_endpoint_is_open() {
    let app = setup_test_app().await;

    let response = app.server.get("/api/health").await;
    assert_eq!(response.status_code(), 200);
}
