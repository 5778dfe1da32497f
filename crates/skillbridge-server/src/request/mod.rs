//! Request data transfer objects.
//!
//! String fields default to empty on missing keys so that an absent field
//! surfaces as a 400 validation error rather than a deserialization
//! rejection; enum-like fields arrive as strings and are parsed explicitly
//! for the same reason.

use serde::Deserialize;
use validator::Validate;

/// Registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account email.
    #[serde(default)]
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    /// Plaintext password, hashed before persistence.
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Display name.
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    /// Requested role: learner, mentor, or client.
    #[serde(default)]
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Account password.
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Course creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    /// Course title.
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    /// Course description.
    #[serde(default)]
    #[validate(length(min = 1, max = 2000, message = "description is required"))]
    pub description: String,
    /// Catalogue category.
    pub category: Option<String>,
    /// Difficulty rating: Beginner, Intermediate, or Advanced.
    pub difficulty: Option<String>,
}

/// Job creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    /// Posting title.
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    /// Posting description.
    #[serde(default)]
    #[validate(length(min = 1, max = 2000, message = "description is required"))]
    pub description: String,
    /// Skills the client is looking for.
    #[serde(default)]
    pub skills_required: Vec<String>,
    /// Offered budget.
    pub budget: Option<f64>,
}

/// Catalogue filter parameters.
#[derive(Debug, Deserialize, Default)]
pub struct CourseFilterParams {
    /// Category filter.
    #[serde(default)]
    pub category: Option<String>,
    /// Difficulty filter.
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Job board filter parameters.
#[derive(Debug, Deserialize, Default)]
pub struct JobFilterParams {
    /// Status filter.
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_validation_errors() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("role"));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email": "not-an-email", "password": "pw123456", "name": "Jane", "role": "mentor"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_valid_register_passes() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email": "jane@test.com", "password": "pw123456", "name": "Jane", "role": "mentor"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_course_requires_title_and_description() {
        let req: CreateCourseRequest =
            serde_json::from_str(r#"{"title": "X"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("description"));
        assert!(!fields.contains_key("title"));
    }
}
