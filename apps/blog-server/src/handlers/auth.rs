//! Authentication handlers.

use actix_web::{HttpResponse, web};

use quill_core::ports::AuthError;
use quill_shared::dto::{AuthResponse, LoginRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let session = state
        .identity
        .authenticate(&req.email, &req.password)
        .map_err(|e| match e {
            AuthError::HashingError(msg) => AppError::Internal(msg),
            _ => {
                tracing::warn!(email = %req.email, "Rejected API sign-in");
                AppError::Unauthorized
            }
        })?;

    tracing::info!(email = %session.email, "Admin signed in via API");

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: session.token,
        token_type: "Bearer".to_string(),
        expires_in: state.identity.token_lifetime_seconds().max(0) as u64,
    }))
}
