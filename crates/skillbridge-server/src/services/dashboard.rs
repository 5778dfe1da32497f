//! Role-shaped dashboard aggregation.

use serde::Serialize;
use skillbridge_common_core::Role;

use crate::error::ApiResult;
use crate::middleware::auth::AuthUser;
use crate::store::MarketStore;

/// Per-role dashboard summary.
///
/// Serialized untagged so each role gets exactly its own field set on the
/// wire, instead of one loosely-populated object.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DashboardStats {
    /// Learner summary.
    Learner(LearnerStats),
    /// Mentor summary.
    Mentor(MentorStats),
    /// Client summary.
    Client(ClientStats),
}

/// What a learner sees on their dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerStats {
    /// Courses the learner is enrolled in.
    pub enrolled_courses: u64,
    /// Jobs the learner has applied to.
    pub applications: u64,
}

/// What a mentor sees on their dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorStats {
    /// Courses the mentor has created.
    pub courses_created: u64,
}

/// What a client sees on their dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStats {
    /// Jobs the client has posted.
    pub jobs_posted: u64,
}

/// Aggregate the calling user's dashboard numbers. Pure reads, no mutation.
///
/// The two learner counts are independent, so they are fetched concurrently
/// and joined.
pub async fn stats(store: &dyn MarketStore, user: &AuthUser) -> ApiResult<DashboardStats> {
    match user.role {
        Role::Learner => {
            let (enrollments, applications) = tokio::join!(
                store.count_enrollments(user.id),
                store.count_applications(user.id),
            );
            Ok(DashboardStats::Learner(LearnerStats {
                enrolled_courses: enrollments?,
                applications: applications?,
            }))
        }
        Role::Mentor => Ok(DashboardStats::Mentor(MentorStats {
            courses_created: store.count_courses_by_instructor(user.id).await?,
        })),
        Role::Client => Ok(DashboardStats::Client(ClientStats {
            jobs_posted: store.count_jobs_by_client(user.id).await?,
        })),
    }
}
