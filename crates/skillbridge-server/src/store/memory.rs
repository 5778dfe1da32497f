//! In-memory store implementation.

use super::{
    CourseFilter, JobFilter, MarketStore, NewCourse, NewJob, NewUser, StoreError, StoreResult,
};
use async_trait::async_trait;
use chrono::Utc;
use skillbridge_common_core::{
    Application, ApplicationId, ApplicationStatus, Course, CourseId, EnrolledCourse, Enrollment,
    EnrollmentId, Job, JobApplication, JobId, JobStatus, User, UserId,
};
use tokio::sync::RwLock;
use tracing::debug;

/// All tables plus id counters behind one lock.
///
/// A single writer lock makes every uniqueness check atomic with its insert:
/// two racing identical inserts resolve to exactly one success and one
/// `Duplicate` error.
#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    courses: Vec<Course>,
    jobs: Vec<Job>,
    enrollments: Vec<Enrollment>,
    applications: Vec<Application>,
    next_id: i64,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory [`MarketStore`] backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MarketStore for MemoryStore {
    async fn insert_user(&self, new: NewUser) -> StoreResult<User> {
        let mut tables = self.inner.write().await;

        if tables.users.iter().any(|u| u.email == new.email) {
            return Err(StoreError::Duplicate("email"));
        }

        let user = User {
            id: UserId::from_raw(tables.allocate_id()),
            email: new.email,
            password_hash: new.password_hash,
            name: new.name,
            role: new.role,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        debug!(user_id = %user.id, "user row inserted");
        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.inner.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn user_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let tables = self.inner.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert_course(&self, new: NewCourse) -> StoreResult<Course> {
        let mut tables = self.inner.write().await;

        let course = Course {
            id: CourseId::from_raw(tables.allocate_id()),
            title: new.title,
            description: new.description,
            category: new.category,
            difficulty: new.difficulty,
            instructor_id: new.instructor_id,
            created_at: Utc::now(),
        };
        tables.courses.push(course.clone());
        debug!(course_id = %course.id, "course row inserted");
        Ok(course)
    }

    async fn course_by_id(&self, id: CourseId) -> StoreResult<Option<Course>> {
        let tables = self.inner.read().await;
        Ok(tables.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn courses(&self, filter: &CourseFilter) -> StoreResult<Vec<Course>> {
        let tables = self.inner.read().await;
        Ok(tables
            .courses
            .iter()
            .filter(|c| {
                filter
                    .category
                    .as_deref()
                    .map_or(true, |category| c.category.as_deref() == Some(category))
            })
            .filter(|c| {
                filter
                    .difficulty
                    .map_or(true, |difficulty| c.difficulty == Some(difficulty))
            })
            .cloned()
            .collect())
    }

    async fn insert_enrollment(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> StoreResult<Enrollment> {
        let mut tables = self.inner.write().await;

        if tables
            .enrollments
            .iter()
            .any(|e| e.user_id == user_id && e.course_id == course_id)
        {
            return Err(StoreError::Duplicate("enrollment"));
        }

        let enrollment = Enrollment {
            id: EnrollmentId::from_raw(tables.allocate_id()),
            user_id,
            course_id,
            progress: 0,
            enrolled_at: Utc::now(),
        };
        tables.enrollments.push(enrollment.clone());
        debug!(enrollment_id = %enrollment.id, "enrollment row inserted");
        Ok(enrollment)
    }

    async fn enrollments_for_user(&self, user_id: UserId) -> StoreResult<Vec<EnrolledCourse>> {
        let tables = self.inner.read().await;
        Ok(tables
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter_map(|e| {
                tables
                    .courses
                    .iter()
                    .find(|c| c.id == e.course_id)
                    .map(|course| EnrolledCourse {
                        enrollment: e.clone(),
                        course: course.clone(),
                    })
            })
            .collect())
    }

    async fn count_enrollments(&self, user_id: UserId) -> StoreResult<u64> {
        let tables = self.inner.read().await;
        Ok(tables
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .count() as u64)
    }

    async fn insert_job(&self, new: NewJob) -> StoreResult<Job> {
        let mut tables = self.inner.write().await;

        let job = Job {
            id: JobId::from_raw(tables.allocate_id()),
            title: new.title,
            description: new.description,
            client_id: new.client_id,
            skills_required: new.skills_required,
            budget: new.budget,
            status: JobStatus::Open,
            created_at: Utc::now(),
        };
        tables.jobs.push(job.clone());
        debug!(job_id = %job.id, "job row inserted");
        Ok(job)
    }

    async fn job_by_id(&self, id: JobId) -> StoreResult<Option<Job>> {
        let tables = self.inner.read().await;
        Ok(tables.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn jobs(&self, filter: &JobFilter) -> StoreResult<Vec<Job>> {
        let tables = self.inner.read().await;
        Ok(tables
            .jobs
            .iter()
            .filter(|j| filter.status.map_or(true, |status| j.status == status))
            .cloned()
            .collect())
    }

    async fn insert_application(
        &self,
        user_id: UserId,
        job_id: JobId,
    ) -> StoreResult<Application> {
        let mut tables = self.inner.write().await;

        if tables
            .applications
            .iter()
            .any(|a| a.user_id == user_id && a.job_id == job_id)
        {
            return Err(StoreError::Duplicate("application"));
        }

        let application = Application {
            id: ApplicationId::from_raw(tables.allocate_id()),
            job_id,
            user_id,
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
        };
        tables.applications.push(application.clone());
        debug!(application_id = %application.id, "application row inserted");
        Ok(application)
    }

    async fn applications_for_user(&self, user_id: UserId) -> StoreResult<Vec<JobApplication>> {
        let tables = self.inner.read().await;
        Ok(tables
            .applications
            .iter()
            .filter(|a| a.user_id == user_id)
            .filter_map(|a| {
                tables
                    .jobs
                    .iter()
                    .find(|j| j.id == a.job_id)
                    .map(|job| JobApplication {
                        application: a.clone(),
                        job: job.clone(),
                    })
            })
            .collect())
    }

    async fn count_applications(&self, user_id: UserId) -> StoreResult<u64> {
        let tables = self.inner.read().await;
        Ok(tables
            .applications
            .iter()
            .filter(|a| a.user_id == user_id)
            .count() as u64)
    }

    async fn count_courses_by_instructor(&self, instructor_id: UserId) -> StoreResult<u64> {
        let tables = self.inner.read().await;
        Ok(tables
            .courses
            .iter()
            .filter(|c| c.instructor_id == instructor_id)
            .count() as u64)
    }

    async fn count_jobs_by_client(&self, client_id: UserId) -> StoreResult<u64> {
        let tables = self.inner.read().await;
        Ok(tables
            .jobs
            .iter()
            .filter(|j| j.client_id == client_id)
            .count() as u64)
    }
}
