//! Storage abstraction.
//!
//! The lifecycle services talk to a [`MarketStore`] trait object rather than
//! a concrete database, so they can be exercised in tests with the in-memory
//! backend. Uniqueness invariants (one enrollment per (user, course), one
//! application per (user, job), one account per email) are enforced inside
//! the store, atomically with the insert.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use skillbridge_common_core::{
    Application, Course, CourseId, Difficulty, EnrolledCourse, Enrollment, Job, JobApplication,
    JobId, JobStatus, Role, User, UserId,
};
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated.
    #[error("duplicate {0}")]
    Duplicate(&'static str),
}

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Normalised email address.
    pub email: String,
    /// Salted one-way password hash.
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: Role,
}

/// Input for creating a course.
#[derive(Debug, Clone)]
pub struct NewCourse {
    /// Course title.
    pub title: String,
    /// Course description.
    pub description: String,
    /// Catalogue category.
    pub category: Option<String>,
    /// Difficulty rating.
    pub difficulty: Option<Difficulty>,
    /// The mentor creating the course.
    pub instructor_id: UserId,
}

/// Input for creating a job.
#[derive(Debug, Clone)]
pub struct NewJob {
    /// Posting title.
    pub title: String,
    /// Posting description.
    pub description: String,
    /// The client posting the job.
    pub client_id: UserId,
    /// Skills the client wants.
    pub skills_required: Vec<String>,
    /// Offered budget.
    pub budget: Option<f64>,
}

/// Catalogue query filter.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    /// Match this category exactly.
    pub category: Option<String>,
    /// Match this difficulty exactly.
    pub difficulty: Option<Difficulty>,
}

/// Job board query filter.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Match this lifecycle state exactly.
    pub status: Option<JobStatus>,
}

/// Create/read/query operations over the marketplace tables.
#[async_trait]
pub trait MarketStore: Send + Sync {
    /// Insert a user; fails with [`StoreError::Duplicate`] if the email is taken.
    async fn insert_user(&self, new: NewUser) -> StoreResult<User>;

    /// Look up a user by normalised email.
    async fn user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Look up a user by id.
    async fn user_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Insert a course.
    async fn insert_course(&self, new: NewCourse) -> StoreResult<Course>;

    /// Look up a course by id.
    async fn course_by_id(&self, id: CourseId) -> StoreResult<Option<Course>>;

    /// List courses matching the filter, oldest first.
    async fn courses(&self, filter: &CourseFilter) -> StoreResult<Vec<Course>>;

    /// Insert an enrollment; fails with [`StoreError::Duplicate`] if the
    /// (user, course) pair already exists. The check and insert are atomic.
    async fn insert_enrollment(&self, user_id: UserId, course_id: CourseId)
        -> StoreResult<Enrollment>;

    /// A user's enrollments joined with their courses.
    async fn enrollments_for_user(&self, user_id: UserId) -> StoreResult<Vec<EnrolledCourse>>;

    /// How many courses a user is enrolled in.
    async fn count_enrollments(&self, user_id: UserId) -> StoreResult<u64>;

    /// Insert a job.
    async fn insert_job(&self, new: NewJob) -> StoreResult<Job>;

    /// Look up a job by id.
    async fn job_by_id(&self, id: JobId) -> StoreResult<Option<Job>>;

    /// List jobs matching the filter, oldest first.
    async fn jobs(&self, filter: &JobFilter) -> StoreResult<Vec<Job>>;

    /// Insert an application; fails with [`StoreError::Duplicate`] if the
    /// (user, job) pair already exists. The check and insert are atomic.
    async fn insert_application(&self, user_id: UserId, job_id: JobId)
        -> StoreResult<Application>;

    /// A user's applications joined with their jobs.
    async fn applications_for_user(&self, user_id: UserId) -> StoreResult<Vec<JobApplication>>;

    /// How many jobs a user has applied to.
    async fn count_applications(&self, user_id: UserId) -> StoreResult<u64>;

    /// How many courses a mentor has created.
    async fn count_courses_by_instructor(&self, instructor_id: UserId) -> StoreResult<u64>;

    /// How many jobs a client has posted.
    async fn count_jobs_by_client(&self, client_id: UserId) -> StoreResult<u64>;
}
