//! The role model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's role, fixed at registration.
///
/// The role determines which mutating actions the policy layer permits;
/// it never changes after the account is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Takes courses and applies to jobs.
    Learner,
    /// Creates and teaches courses.
    Mentor,
    /// Posts jobs.
    Client,
}

impl Role {
    /// All roles accepted at registration.
    pub const ALL: [Role; 3] = [Role::Learner, Role::Mentor, Role::Client];

    /// Wire-format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Learner => "learner",
            Role::Mentor => "mentor",
            Role::Client => "client",
        }
    }

    /// Is this a learner account?
    pub fn is_learner(&self) -> bool {
        matches!(self, Role::Learner)
    }

    /// Is this a mentor account?
    pub fn is_mentor(&self) -> bool {
        matches!(self, Role::Mentor)
    }

    /// Is this a client account?
    pub fn is_client(&self) -> bool {
        matches!(self, Role::Client)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a role name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role")]
pub struct RoleParseError;

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "learner" => Ok(Role::Learner),
            "mentor" => Ok(Role::Mentor),
            "client" => Ok(Role::Client),
            _ => Err(RoleParseError),
        }
    }
}
