//! Job and application handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use skillbridge_common_core::JobId;

use crate::error::ApiResult;
use crate::middleware::auth::Auth;
use crate::request::{CreateJobRequest, JobFilterParams};
use crate::response::ApiResponse;
use crate::services;
use crate::state::AppState;

/// `GET /jobs`
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobFilterParams>,
) -> ApiResult<impl IntoResponse> {
    let jobs = services::jobs::list_jobs(state.store.as_ref(), params).await?;
    Ok(Json(ApiResponse::success(jobs)))
}

/// `GET /jobs/:id`
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<JobId>,
) -> ApiResult<impl IntoResponse> {
    let job = services::jobs::get_job(state.store.as_ref(), id).await?;
    Ok(Json(ApiResponse::success(job)))
}

/// `POST /jobs`
pub async fn create_job(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(req): Json<CreateJobRequest>,
) -> ApiResult<impl IntoResponse> {
    let job = services::jobs::create_job(state.store.as_ref(), &state.policy, &user, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(job))))
}

/// `POST /jobs/:id/apply`
pub async fn apply(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(id): Path<JobId>,
) -> ApiResult<impl IntoResponse> {
    let application =
        services::jobs::apply(state.store.as_ref(), &state.policy, &user, id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(application))))
}

/// `GET /applications`
pub async fn list_applications(
    State(state): State<AppState>,
    Auth(user): Auth,
) -> ApiResult<impl IntoResponse> {
    let applications =
        services::jobs::list_applications(state.store.as_ref(), &state.policy, &user).await?;
    Ok(Json(ApiResponse::success(applications)))
}
