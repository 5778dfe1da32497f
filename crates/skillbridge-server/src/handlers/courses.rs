//! Course and enrollment handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use skillbridge_common_core::CourseId;

use crate::error::ApiResult;
use crate::middleware::auth::Auth;
use crate::request::{CourseFilterParams, CreateCourseRequest};
use crate::response::ApiResponse;
use crate::services;
use crate::state::AppState;

/// `GET /courses`
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseFilterParams>,
) -> ApiResult<impl IntoResponse> {
    let courses = services::courses::list_courses(state.store.as_ref(), params).await?;
    Ok(Json(ApiResponse::success(courses)))
}

/// `GET /courses/:id`
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<CourseId>,
) -> ApiResult<impl IntoResponse> {
    let course = services::courses::get_course(state.store.as_ref(), id).await?;
    Ok(Json(ApiResponse::success(course)))
}

/// `POST /courses`
pub async fn create_course(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(req): Json<CreateCourseRequest>,
) -> ApiResult<impl IntoResponse> {
    let course =
        services::courses::create_course(state.store.as_ref(), &state.policy, &user, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(course))))
}

/// `POST /courses/:id/enroll`
pub async fn enroll(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(id): Path<CourseId>,
) -> ApiResult<impl IntoResponse> {
    let enrollment =
        services::courses::enroll(state.store.as_ref(), &state.policy, &user, id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(enrollment))))
}

/// `GET /enrollments`
pub async fn list_enrollments(
    State(state): State<AppState>,
    Auth(user): Auth,
) -> ApiResult<impl IntoResponse> {
    let enrollments =
        services::courses::list_enrollments(state.store.as_ref(), &state.policy, &user).await?;
    Ok(Json(ApiResponse::success(enrollments)))
}
