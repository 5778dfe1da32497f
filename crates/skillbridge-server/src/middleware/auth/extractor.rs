//! Authentication extractors for handlers.

use super::types::AuthUser;
use crate::error::ApiError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Extractor for authenticated user (required).
///
/// Relies on [`super::AuthLayer`] having inserted the user into request
/// extensions; routes outside that layer get a 401.
pub struct Auth(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(Auth)
            .ok_or(ApiError::Unauthorized)
    }
}

/// Extractor for optional authenticated user.
pub struct MaybeAuth(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuth(parts.extensions.get::<AuthUser>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::types::Claims;
    use axum::http::Request;
    use skillbridge_common_core::{Role, UserId};

    fn sample_auth_user() -> AuthUser {
        let claims = Claims::new(UserId::from_raw(1), "test@example.com", Role::Learner, 3600);
        AuthUser::from_claims(claims).unwrap()
    }

    #[tokio::test]
    async fn test_auth_extractor_success() {
        let auth_user = sample_auth_user();

        let req = Request::new(());
        let (mut parts, _) = req.into_parts();
        parts.extensions.insert(auth_user.clone());

        let Auth(extracted_user) = Auth::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted_user.id, auth_user.id);
    }

    #[tokio::test]
    async fn test_auth_extractor_missing() {
        let req = Request::new(());
        let (mut parts, _) = req.into_parts();

        let result = Auth::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_maybe_auth_extractor_some() {
        let auth_user = sample_auth_user();

        let req = Request::new(());
        let (mut parts, _) = req.into_parts();
        parts.extensions.insert(auth_user.clone());

        let MaybeAuth(extracted_user) =
            MaybeAuth::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(extracted_user.is_some());
        assert_eq!(extracted_user.unwrap().id, auth_user.id);
    }

    #[tokio::test]
    async fn test_maybe_auth_extractor_none() {
        let req = Request::new(());
        let (mut parts, _) = req.into_parts();

        let MaybeAuth(extracted_user) =
            MaybeAuth::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(extracted_user.is_none());
    }
}
