//! Authentication types.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use skillbridge_common_core::{Role, UserId};
use uuid::Uuid;

/// JWT claims structure.
///
/// Claims are self-contained: verification never re-reads the credential
/// store, so a user deleted after issuance stays authenticated until the
/// token expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: String,
    /// User email.
    pub email: String,
    /// User role.
    pub role: Role,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
    /// JWT ID.
    pub jti: String,
}

impl Claims {
    /// Create claims expiring `expires_in` seconds from now.
    pub fn new(user_id: UserId, email: &str, role: Role, expires_in: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: now,
            exp: now + expires_in,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Get user ID.
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }

    /// Check if the claims are past their expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Authenticated user context.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Resolved user ID.
    pub id: UserId,
    /// Email from the token.
    pub email: String,
    /// Role from the token.
    pub role: Role,
    /// The full claim set.
    pub claims: Claims,
}

impl AuthUser {
    /// Create from claims.
    pub fn from_claims(claims: Claims) -> Option<Self> {
        let id = claims.user_id()?;
        Some(Self {
            id,
            email: claims.email.clone(),
            role: claims.role,
            claims,
        })
    }
}
