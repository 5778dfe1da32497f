//! Dashboard handlers.

use axum::{extract::State, response::IntoResponse, Json};

use crate::error::ApiResult;
use crate::middleware::auth::Auth;
use crate::response::ApiResponse;
use crate::services;
use crate::state::AppState;

/// `GET /dashboard/stats`
pub async fn stats(
    State(state): State<AppState>,
    Auth(user): Auth,
) -> ApiResult<impl IntoResponse> {
    let stats = services::dashboard::stats(state.store.as_ref(), &user).await?;
    Ok(Json(ApiResponse::success(stats)))
}
