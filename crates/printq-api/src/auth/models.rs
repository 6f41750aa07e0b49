//! Verified admin identity, extracted from the bearer token.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};
use printq_core::models::AdminUserInfo;
use printq_core::AppError;
use uuid::Uuid;

use crate::error::HttpAppError;
use crate::state::AppState;

/// Admin identity proven by a valid token. Handlers that take this as an
/// argument are admin-gated; extraction fails with a uniform 401 when the
/// header is missing, malformed, invalid, or expired.
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub user_id: Uuid,
    pub username: String,
}

impl From<AdminContext> for AdminUserInfo {
    fn from(ctx: AdminContext) -> Self {
        Self {
            id: ctx.user_id,
            username: ctx.username,
        }
    }
}

impl FromRequestParts<Arc<AppState>> for AdminContext {
    type Rejection = HttpAppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("No token provided".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Invalid authorization header".to_string()))?;

        let claims = state.jwt.verify(token)?;

        Ok(AdminContext {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}
