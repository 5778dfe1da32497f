//! API v1 routes.

use crate::handlers;
use crate::middleware::auth::AuthLayer;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Create the v1 API router.
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        // Public routes
        .merge(public_routes())
        // Authenticated routes
        .merge(authenticated_routes(state))
}

fn public_routes() -> Router<AppState> {
    Router::new()
        // Authentication
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        // Public catalogue reads
        .route("/courses", get(handlers::courses::list_courses))
        .route("/courses/:id", get(handlers::courses::get_course))
        .route("/jobs", get(handlers::jobs::list_jobs))
        .route("/jobs/:id", get(handlers::jobs::get_job))
}

fn authenticated_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // Identity
        .route("/auth/me", get(handlers::auth::me))
        // Courses
        .route("/courses", post(handlers::courses::create_course))
        .route("/courses/:id/enroll", post(handlers::courses::enroll))
        .route("/enrollments", get(handlers::courses::list_enrollments))
        // Jobs
        .route("/jobs", post(handlers::jobs::create_job))
        .route("/jobs/:id/apply", post(handlers::jobs::apply))
        .route("/applications", get(handlers::jobs::list_applications))
        // Dashboard
        .route("/dashboard/stats", get(handlers::dashboard::stats))
        .layer(AuthLayer::new(state.config.auth.jwt_secret.clone()))
}
