//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::error::ApiResult;
use crate::middleware::auth::Auth;
use crate::request::{LoginRequest, RegisterRequest};
use crate::response::ApiResponse;
use crate::services;
use crate::state::AppState;

/// `POST /auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let payload =
        services::auth::register(state.store.as_ref(), &state.config.auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(payload))))
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let payload = services::auth::login(state.store.as_ref(), &state.config.auth, req).await?;
    Ok(Json(ApiResponse::success(payload)))
}

/// `GET /auth/me`
pub async fn me(State(state): State<AppState>, Auth(user): Auth) -> ApiResult<impl IntoResponse> {
    let profile = services::auth::current_user(state.store.as_ref(), &user).await?;
    Ok(Json(ApiResponse::success(profile)))
}
