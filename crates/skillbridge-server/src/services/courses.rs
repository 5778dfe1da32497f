//! Course catalogue and enrollment lifecycle.

use skillbridge_common_core::{Course, CourseId, Difficulty, EnrolledCourse, Enrollment};
use tracing::{info, warn};
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::authz::{Action, PolicyRegistry, Resource};
use crate::request::{CourseFilterParams, CreateCourseRequest};
use crate::store::{CourseFilter, MarketStore, NewCourse, StoreError};

/// Create a course.
///
/// The policy check runs before validation: a non-mentor is turned away
/// regardless of what the payload looks like.
pub async fn create_course(
    store: &dyn MarketStore,
    policy: &PolicyRegistry,
    user: &AuthUser,
    req: CreateCourseRequest,
) -> ApiResult<Course> {
    if !policy.check(user.role, Action::Create, Resource::Course) {
        warn!(user_id = %user.id, role = %user.role, "course creation denied");
        return Err(ApiError::InsufficientPermissions);
    }

    req.validate()?;

    let difficulty = req
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()
        .map_err(|_| {
            ApiError::BadRequest(
                "difficulty must be one of: Beginner, Intermediate, Advanced".into(),
            )
        })?;

    let course = store
        .insert_course(NewCourse {
            title: req.title.trim().to_string(),
            description: req.description.trim().to_string(),
            category: req.category,
            difficulty,
            instructor_id: user.id,
        })
        .await?;

    info!(course_id = %course.id, instructor_id = %user.id, "course created");
    Ok(course)
}

/// List the catalogue, optionally filtered by category and difficulty.
pub async fn list_courses(
    store: &dyn MarketStore,
    params: CourseFilterParams,
) -> ApiResult<Vec<Course>> {
    let difficulty = params
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()
        .map_err(|_| ApiError::InvalidQueryParam("difficulty".into()))?;

    let filter = CourseFilter {
        category: params.category,
        difficulty,
    };
    Ok(store.courses(&filter).await?)
}

/// Fetch one course.
pub async fn get_course(store: &dyn MarketStore, id: CourseId) -> ApiResult<Course> {
    store
        .course_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course".into()))
}

/// Enroll the calling learner in a course.
///
/// The store enforces the one-enrollment-per-(user, course) invariant
/// atomically; a second attempt surfaces as a duplicate error, never a
/// second row.
pub async fn enroll(
    store: &dyn MarketStore,
    policy: &PolicyRegistry,
    user: &AuthUser,
    course_id: CourseId,
) -> ApiResult<Enrollment> {
    if !policy.check(user.role, Action::Create, Resource::Enrollment) {
        warn!(user_id = %user.id, role = %user.role, "enrollment denied");
        return Err(ApiError::InsufficientPermissions);
    }

    let enrollment = store
        .insert_enrollment(user.id, course_id)
        .await
        .map_err(|err| match err {
            StoreError::Duplicate(_) => ApiError::DuplicateEntry("already enrolled".into()),
        })?;

    info!(user_id = %user.id, course_id = %course_id, "learner enrolled");
    Ok(enrollment)
}

/// The calling user's enrollments, joined with their courses.
pub async fn list_enrollments(
    store: &dyn MarketStore,
    policy: &PolicyRegistry,
    user: &AuthUser,
) -> ApiResult<Vec<EnrolledCourse>> {
    if !policy.check(user.role, Action::Read, Resource::Enrollment) {
        return Err(ApiError::InsufficientPermissions);
    }
    Ok(store.enrollments_for_user(user.id).await?)
}
