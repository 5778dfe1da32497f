//! Domain records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{ApplicationId, CourseId, EnrollmentId, JobId, UserId};
use crate::role::Role;
use crate::status::{ApplicationStatus, Difficulty, JobStatus};

/// A registered account.
///
/// Holds the password hash, so it is never serialized as-is; use
/// [`User::profile`] for anything that leaves the process.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Unique, normalised (trimmed + lowercased) email address.
    pub email: String,
    /// Salted one-way password hash in PHC string format.
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Role, immutable after registration.
    pub role: Role,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Wire-safe projection of this account.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// The public view of a [`User`]: everything except credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: Role,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

/// A course in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned identifier.
    pub id: CourseId,
    /// Course title.
    pub title: String,
    /// What the course covers.
    pub description: String,
    /// Free-form catalogue category.
    pub category: Option<String>,
    /// Difficulty rating.
    pub difficulty: Option<Difficulty>,
    /// The mentor who owns the course.
    pub instructor_id: UserId,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Store-assigned identifier.
    pub id: JobId,
    /// Posting title.
    pub title: String,
    /// What the work involves.
    pub description: String,
    /// The client who posted the job.
    pub client_id: UserId,
    /// Skills the client is looking for.
    pub skills_required: Vec<String>,
    /// Offered budget.
    pub budget: Option<f64>,
    /// Lifecycle state, `open` on creation.
    pub status: JobStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A learner's membership in a course.
///
/// At most one enrollment exists per (user, course) pair; the store rejects
/// duplicates atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Store-assigned identifier.
    pub id: EnrollmentId,
    /// The enrolled learner.
    pub user_id: UserId,
    /// The course enrolled in.
    pub course_id: CourseId,
    /// Completion counter, starts at 0.
    pub progress: u32,
    /// Enrollment time.
    pub enrolled_at: DateTime<Utc>,
}

/// A learner's application to a job.
///
/// At most one application exists per (user, job) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Store-assigned identifier.
    pub id: ApplicationId,
    /// The job applied to.
    pub job_id: JobId,
    /// The applying learner.
    pub user_id: UserId,
    /// Review state, `pending` on creation.
    pub status: ApplicationStatus,
    /// Application time.
    pub applied_at: DateTime<Utc>,
}

/// An enrollment joined with its course, for user-scoped listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrolledCourse {
    /// The enrollment row.
    #[serde(flatten)]
    pub enrollment: Enrollment,
    /// The course it refers to.
    pub course: Course,
}

/// An application joined with its job, for user-scoped listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    /// The application row.
    #[serde(flatten)]
    pub application: Application,
    /// The job it refers to.
    pub job: Job,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::from_raw(1),
            email: "jane@test.com".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".into(),
            name: "Jane".into(),
            role: Role::Mentor,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_profile_omits_credentials() {
        let user = sample_user();
        let profile = user.profile();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["email"], "jane@test.com");
        assert_eq!(json["role"], "mentor");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_enrolled_course_flattens_enrollment() {
        let enrolled = EnrolledCourse {
            enrollment: Enrollment {
                id: EnrollmentId::from_raw(5),
                user_id: UserId::from_raw(1),
                course_id: CourseId::from_raw(2),
                progress: 0,
                enrolled_at: Utc::now(),
            },
            course: Course {
                id: CourseId::from_raw(2),
                title: "X".into(),
                description: "Y".into(),
                category: None,
                difficulty: Some(Difficulty::Beginner),
                instructor_id: UserId::from_raw(9),
                created_at: Utc::now(),
            },
        };
        let json = serde_json::to_value(&enrolled).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["progress"], 0);
        assert_eq!(json["course"]["title"], "X");
    }
}
