//! Registration, login, and identity lookup.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use serde::Serialize;
use skillbridge_common_core::{Role, User, UserProfile};
use tracing::{info, warn};
use validator::Validate;

use crate::config::AuthConfig;
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::{jwt, AuthUser, Claims};
use crate::request::{LoginRequest, RegisterRequest};
use crate::store::{MarketStore, NewUser, StoreError};

/// A token plus the account it authenticates.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    /// Signed bearer token.
    pub token: String,
    /// The authenticated account.
    pub user: UserProfile,
}

/// Register a new account and log it in.
///
/// The password is hashed before it reaches the store; the plaintext is
/// never persisted or echoed back.
pub async fn register(
    store: &dyn MarketStore,
    auth: &AuthConfig,
    req: RegisterRequest,
) -> ApiResult<AuthPayload> {
    req.validate()?;

    let role: Role = req
        .role
        .parse()
        .map_err(|_| ApiError::BadRequest("role must be one of: learner, mentor, client".into()))?;

    let password_hash = hash_password(&req.password)?;
    let user = store
        .insert_user(NewUser {
            email: req.email.trim().to_lowercase(),
            password_hash,
            name: req.name.trim().to_string(),
            role,
        })
        .await
        .map_err(|err| match err {
            StoreError::Duplicate(_) => ApiError::DuplicateEntry("email already exists".into()),
        })?;

    info!(user_id = %user.id, role = %user.role, "user registered");

    let token = issue_token(&user, auth)?;
    Ok(AuthPayload {
        token,
        user: user.profile(),
    })
}

/// Authenticate an existing account.
///
/// Unknown email and wrong password produce the same error, so the endpoint
/// cannot be used to probe which addresses are registered.
pub async fn login(
    store: &dyn MarketStore,
    auth: &AuthConfig,
    req: LoginRequest,
) -> ApiResult<AuthPayload> {
    req.validate()?;

    let email = req.email.trim().to_lowercase();
    let user = match store.user_by_email(&email).await? {
        Some(user) => user,
        None => {
            warn!(email = %email, "login attempt for unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&req.password, &user.password_hash) {
        warn!(user_id = %user.id, "login attempt with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    info!(user_id = %user.id, "user logged in");

    let token = issue_token(&user, auth)?;
    Ok(AuthPayload {
        token,
        user: user.profile(),
    })
}

/// Resolve the calling token back to its account.
///
/// Tokens are self-contained, so this is the one place where a stale token
/// for a deleted account is caught.
pub async fn current_user(store: &dyn MarketStore, user: &AuthUser) -> ApiResult<UserProfile> {
    store
        .user_by_id(user.id)
        .await?
        .map(|u| u.profile())
        .ok_or_else(|| ApiError::NotFound("User".into()))
}

fn issue_token(user: &User, auth: &AuthConfig) -> ApiResult<String> {
    let claims = Claims::new(
        user.id,
        &user.email,
        user.role,
        auth.token_expiry_secs as i64,
    );
    jwt::encode_token(&claims, &auth.jwt_secret).map_err(|e| ApiError::Internal(e.into()))
}

fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("password hashing failed: {e}")))
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".into(),
            token_expiry_secs: 3600,
        }
    }

    fn register_request(email: &str, role: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            password: "pw123456".into(),
            name: "Jane".into(),
            role: role.into(),
        }
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = hash_password("pw123456").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, "pw123456");
        assert!(verify_password("pw123456", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_verify_tolerates_malformed_hash() {
        assert!(!verify_password("pw123456", "not-a-phc-string"));
    }

    #[tokio::test]
    async fn test_register_issues_token_with_submitted_role() {
        let store = MemoryStore::new();
        let auth = auth_config();

        let payload = register(&store, &auth, register_request("jane@test.com", "mentor"))
            .await
            .unwrap();

        assert_eq!(payload.user.role, Role::Mentor);
        let claims = jwt::decode_token(&payload.token, &auth.jwt_secret).unwrap();
        assert_eq!(claims.role, Role::Mentor);
        assert_eq!(claims.user_id(), Some(payload.user.id));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_role() {
        let store = MemoryStore::new();
        let err = register(&store, &auth_config(), register_request("x@test.com", "admin"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_missing_fields() {
        let store = MemoryStore::new();
        let req = RegisterRequest {
            email: String::new(),
            password: String::new(),
            name: String::new(),
            role: String::new(),
        };
        let err = register(&store, &auth_config(), req).await.unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_first_record() {
        let store = MemoryStore::new();
        let auth = auth_config();

        let first = register(&store, &auth, register_request("jane@test.com", "mentor"))
            .await
            .unwrap();
        let err = register(&store, &auth, register_request("jane@test.com", "client"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::DuplicateEntry(_)));

        let kept = store
            .user_by_email("jane@test.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(kept.id, first.user.id);
        assert_eq!(kept.role, Role::Mentor);
    }

    #[tokio::test]
    async fn test_register_normalises_email_then_login_succeeds() {
        let store = MemoryStore::new();
        let auth = auth_config();

        register(&store, &auth, register_request("  Jane@Test.com ", "learner"))
            .await
            .unwrap();

        let payload = login(
            &store,
            &auth,
            LoginRequest {
                email: "jane@test.com".into(),
                password: "pw123456".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(payload.user.email, "jane@test.com");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let store = MemoryStore::new();
        let auth = auth_config();
        register(&store, &auth, register_request("x@test.com", "learner"))
            .await
            .unwrap();

        let wrong_password = login(
            &store,
            &auth,
            LoginRequest {
                email: "x@test.com".into(),
                password: "wrong".into(),
            },
        )
        .await
        .unwrap_err();
        let unknown_user = login(
            &store,
            &auth,
            LoginRequest {
                email: "noone@test.com".into(),
                password: "anything".into(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(wrong_password, ApiError::InvalidCredentials));
        assert!(matches!(unknown_user, ApiError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.status_code(), unknown_user.status_code());
    }

    #[tokio::test]
    async fn test_current_user_404s_when_account_gone() {
        let store = MemoryStore::new();
        let claims = Claims::new(
            skillbridge_common_core::UserId::from_raw(999),
            "ghost@test.com",
            Role::Learner,
            3600,
        );
        let ghost = AuthUser::from_claims(claims).unwrap();

        let err = current_user(&store, &ghost).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
