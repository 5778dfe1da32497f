//! Common status types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Course difficulty rating.
///
/// Serialized capitalised ("Beginner") to match the public catalogue format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// No prior experience assumed.
    Beginner,
    /// Builds on the basics.
    Intermediate,
    /// Deep-dive material.
    Advanced,
}

/// Error parsing a difficulty rating.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown difficulty")]
pub struct DifficultyParseError;

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Difficulty::Beginner),
            "Intermediate" => Ok(Difficulty::Intermediate),
            "Advanced" => Ok(Difficulty::Advanced),
            _ => Err(DifficultyParseError),
        }
    }
}

/// Job lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepting applications.
    #[default]
    Open,
    /// Work underway.
    InProgress,
    /// Work delivered.
    Completed,
}

impl JobStatus {
    /// Is the job in a terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether `next` is a legal transition from this state.
    ///
    /// Transitions are monotonic: open → in_progress → completed. No state
    /// repeats and none goes backwards.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        matches!(
            (self, next),
            (JobStatus::Open, JobStatus::InProgress)
                | (JobStatus::InProgress, JobStatus::Completed)
        )
    }

}

/// Error parsing a job status.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown job status")]
pub struct JobStatusParseError;

impl FromStr for JobStatus {
    type Err = JobStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(JobStatus::Open),
            "in_progress" => Ok(JobStatus::InProgress),
            "completed" => Ok(JobStatus::Completed),
            _ => Err(JobStatusParseError),
        }
    }
}

/// Application review state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Awaiting review.
    #[default]
    Pending,
    /// Accepted by the client.
    Accepted,
    /// Rejected by the client.
    Rejected,
}

impl ApplicationStatus {
    /// Has the application been decided?
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}
