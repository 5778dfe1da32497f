//! Job board and application lifecycle.

use skillbridge_common_core::{Application, Job, JobApplication, JobId, JobStatus};
use tracing::{info, warn};
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::authz::{Action, PolicyRegistry, Resource};
use crate::request::{CreateJobRequest, JobFilterParams};
use crate::store::{JobFilter, MarketStore, NewJob, StoreError};

/// Post a job.
pub async fn create_job(
    store: &dyn MarketStore,
    policy: &PolicyRegistry,
    user: &AuthUser,
    req: CreateJobRequest,
) -> ApiResult<Job> {
    if !policy.check(user.role, Action::Create, Resource::Job) {
        warn!(user_id = %user.id, role = %user.role, "job creation denied");
        return Err(ApiError::InsufficientPermissions);
    }

    req.validate()?;

    let job = store
        .insert_job(NewJob {
            title: req.title.trim().to_string(),
            description: req.description.trim().to_string(),
            client_id: user.id,
            skills_required: req.skills_required,
            budget: req.budget,
        })
        .await?;

    info!(job_id = %job.id, client_id = %user.id, "job posted");
    Ok(job)
}

/// List the job board, optionally filtered by status.
pub async fn list_jobs(store: &dyn MarketStore, params: JobFilterParams) -> ApiResult<Vec<Job>> {
    let status = params
        .status
        .as_deref()
        .map(str::parse::<JobStatus>)
        .transpose()
        .map_err(|_| ApiError::InvalidQueryParam("status".into()))?;

    Ok(store.jobs(&JobFilter { status }).await?)
}

/// Fetch one job.
pub async fn get_job(store: &dyn MarketStore, id: JobId) -> ApiResult<Job> {
    store
        .job_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Job".into()))
}

/// Apply the calling learner to a job.
///
/// Same duplicate-rejection contract as enrollments: one application per
/// (user, job), enforced atomically by the store.
pub async fn apply(
    store: &dyn MarketStore,
    policy: &PolicyRegistry,
    user: &AuthUser,
    job_id: JobId,
) -> ApiResult<Application> {
    if !policy.check(user.role, Action::Create, Resource::Application) {
        warn!(user_id = %user.id, role = %user.role, "application denied");
        return Err(ApiError::InsufficientPermissions);
    }

    let application = store
        .insert_application(user.id, job_id)
        .await
        .map_err(|err| match err {
            StoreError::Duplicate(_) => ApiError::DuplicateEntry("already applied".into()),
        })?;

    info!(user_id = %user.id, job_id = %job_id, "learner applied");
    Ok(application)
}

/// The calling user's applications, joined with their jobs.
pub async fn list_applications(
    store: &dyn MarketStore,
    policy: &PolicyRegistry,
    user: &AuthUser,
) -> ApiResult<Vec<JobApplication>> {
    if !policy.check(user.role, Action::Read, Resource::Application) {
        return Err(ApiError::InsufficientPermissions);
    }
    Ok(store.applications_for_user(user.id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::Claims;
    use crate::store::MemoryStore;
    use skillbridge_common_core::{ApplicationStatus, Role};

    fn auth_user(id: i64, role: Role) -> AuthUser {
        let claims = Claims::new(
            skillbridge_common_core::UserId::from_raw(id),
            "user@test.com",
            role,
            3600,
        );
        AuthUser::from_claims(claims).unwrap()
    }

    fn job_request() -> CreateJobRequest {
        CreateJobRequest {
            title: "Website Redesign".into(),
            description: "Modern storefront".into(),
            skills_required: vec!["HTML".into(), "CSS".into()],
            budget: Some(5000.0),
        }
    }

    #[tokio::test]
    async fn test_client_posts_job_open_by_default() {
        let store = MemoryStore::new();
        let policy = PolicyRegistry::new();
        let client = auth_user(1, Role::Client);

        let job = create_job(&store, &policy, &client, job_request())
            .await
            .unwrap();
        assert_eq!(job.status, JobStatus::Open);
        assert_eq!(job.client_id, client.id);
    }

    #[tokio::test]
    async fn test_learner_cannot_post_job() {
        let store = MemoryStore::new();
        let policy = PolicyRegistry::new();
        let learner = auth_user(1, Role::Learner);

        let err = create_job(&store, &policy, &learner, job_request())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InsufficientPermissions));
    }

    #[tokio::test]
    async fn test_job_requires_title_and_description() {
        let store = MemoryStore::new();
        let policy = PolicyRegistry::new();
        let client = auth_user(1, Role::Client);

        let req = CreateJobRequest {
            title: String::new(),
            description: String::new(),
            skills_required: vec![],
            budget: None,
        };
        let err = create_job(&store, &policy, &client, req).await.unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_double_apply_conflicts() {
        let store = MemoryStore::new();
        let policy = PolicyRegistry::new();
        let client = auth_user(1, Role::Client);
        let learner = auth_user(2, Role::Learner);

        let job = create_job(&store, &policy, &client, job_request())
            .await
            .unwrap();

        let application = apply(&store, &policy, &learner, job.id).await.unwrap();
        assert_eq!(application.status, ApplicationStatus::Pending);

        let err = apply(&store, &policy, &learner, job.id).await.unwrap_err();
        assert!(matches!(err, ApiError::DuplicateEntry(_)));

        let listed = list_applications(&store, &policy, &learner).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].job.title, "Website Redesign");
    }

    #[tokio::test]
    async fn test_client_cannot_apply() {
        let store = MemoryStore::new();
        let policy = PolicyRegistry::new();
        let client = auth_user(1, Role::Client);

        let err = apply(&store, &policy, &client, JobId::from_raw(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InsufficientPermissions));
    }

    #[tokio::test]
    async fn test_list_jobs_filters_by_status() {
        let store = MemoryStore::new();
        let policy = PolicyRegistry::new();
        let client = auth_user(1, Role::Client);
        create_job(&store, &policy, &client, job_request())
            .await
            .unwrap();

        let open = list_jobs(
            &store,
            JobFilterParams {
                status: Some("open".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(open.len(), 1);

        let completed = list_jobs(
            &store,
            JobFilterParams {
                status: Some("completed".into()),
            },
        )
        .await
        .unwrap();
        assert!(completed.is_empty());

        let err = list_jobs(
            &store,
            JobFilterParams {
                status: Some("bogus".into()),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidQueryParam(_)));
    }

    #[tokio::test]
    async fn test_get_job_404s_on_unknown_id() {
        let store = MemoryStore::new();
        let err = get_job(&store, JobId::from_raw(9)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
