//! Authentication middleware layer.

use super::{jwt::decode_token, types::AuthUser};
use crate::error::ApiError;
use axum::{
    body::Body,
    http::{header, Request},
    response::{IntoResponse, Response},
};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Authentication layer configuration.
///
/// A missing bearer token short-circuits to 401; a token that fails
/// verification (bad signature, malformed, expired) to 403. On success the
/// resolved [`AuthUser`] rides in request extensions for extractors.
#[derive(Clone)]
pub struct AuthLayer {
    jwt_secret: Arc<String>,
}

impl AuthLayer {
    /// Create new auth layer.
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret: Arc::new(jwt_secret),
        }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            jwt_secret: self.jwt_secret.clone(),
        }
    }
}

/// Authentication middleware service.
#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    jwt_secret: Arc<String>,
}

impl<S> Service<Request<Body>> for AuthMiddleware<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let jwt_secret = self.jwt_secret.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let token = match extract_token(&req) {
                Ok(token) => token,
                Err(err) => return Ok(err.into_response()),
            };

            match decode_token(&token, &jwt_secret) {
                Ok(claims) => match AuthUser::from_claims(claims) {
                    Some(auth_user) => {
                        req.extensions_mut().insert(auth_user);
                    }
                    None => return Ok(ApiError::InvalidToken.into_response()),
                },
                Err(err) => return Ok(ApiError::from(err).into_response()),
            }

            // Continue to handler
            inner.call(req).await
        })
    }
}

fn extract_token(req: &Request<Body>) -> Result<String, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(ApiError::Unauthorized)?;

    let auth_str = auth_header.to_str().map_err(|_| ApiError::InvalidToken)?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?
        .trim();

    if token.is_empty() {
        return Err(ApiError::Unauthorized);
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token_from_bearer_header() {
        let req = Request::builder()
            .header("Authorization", "Bearer test_token")
            .body(Body::empty())
            .unwrap();

        let token = extract_token(&req).unwrap();
        assert_eq!(token, "test_token");
    }

    #[test]
    fn test_extract_token_missing_header() {
        let req = Request::builder().body(Body::empty()).unwrap();

        let result = extract_token(&req);
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[test]
    fn test_extract_token_rejects_non_bearer_scheme() {
        let req = Request::builder()
            .header("Authorization", "Basic dXNlcjpwdw==")
            .body(Body::empty())
            .unwrap();

        let result = extract_token(&req);
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[test]
    fn test_extract_token_rejects_empty_token() {
        let req = Request::builder()
            .header("Authorization", "Bearer   ")
            .body(Body::empty())
            .unwrap();

        let result = extract_token(&req);
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }
}
