//! Admin login and token verification.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use printq_core::models::AdminUserInfo;
use printq_core::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::models::AdminContext;
use crate::auth::password::verify_password;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: AdminUserInfo,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: AdminUserInfo,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = serde_json::Value),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    // Unknown user and wrong password produce the same response so the
    // endpoint cannot be used to enumerate usernames.
    let user = state
        .admin_users
        .get_by_username(&request.username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()).into());
    }

    let token = state.jwt.issue(user.id, &user.username)?;

    tracing::info!(username = %user.username, "Admin login successful");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: AdminUserInfo::from(&user),
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = "auth",
    responses(
        (status = 200, description = "Token is valid", body = serde_json::Value),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorResponse)
    )
)]
pub async fn verify_token(admin: AdminContext) -> impl IntoResponse {
    Json(VerifyResponse {
        valid: true,
        user: admin.into(),
    })
}
