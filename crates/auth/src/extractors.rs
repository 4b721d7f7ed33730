//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};

use crate::{token::verify_token, AuthConfig, Claims};

/// Extractor for an authenticated admin. Returns 401 if the request does
/// not carry a valid bearer token.
#[derive(Debug)]
pub struct AdminUser(pub Claims);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let header_value = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or((StatusCode::UNAUTHORIZED, "Missing authorization header"))?
            .to_str()
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid authorization header"))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or((StatusCode::UNAUTHORIZED, "Expected a bearer token"))?;

        let claims = verify_token(token, &config)
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid or expired token"))?;

        Ok(AdminUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue_token;
    use axum::http::Request;
    use uuid::Uuid;

    #[derive(Clone)]
    struct TestState(AuthConfig);

    impl FromRef<TestState> for AuthConfig {
        fn from_ref(state: &TestState) -> AuthConfig {
            state.0.clone()
        }
    }

    fn state() -> TestState {
        TestState(AuthConfig {
            jwt_secret: "extractor-test".to_string(),
            token_ttl_seconds: 3600,
        })
    }

    async fn extract(auth_header: Option<&str>) -> Result<AdminUser, (StatusCode, &'static str)> {
        let mut builder = Request::builder().uri("/api/admin/orders");
        if let Some(value) = auth_header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let request = builder.body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        AdminUser::from_request_parts(&mut parts, &state()).await
    }

    #[tokio::test]
    async fn test_valid_bearer_token_is_accepted() {
        let id = Uuid::new_v4();
        let token = issue_token(id, "curator", &state().0).unwrap();
        let admin = extract(Some(&format!("Bearer {token}"))).await.unwrap();
        assert_eq!(admin.0.sub, id);
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let err = extract(None).await.unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let err = extract(Some("Basic dXNlcjpwYXNz")).await.unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_tampered_token_is_rejected() {
        let token = issue_token(Uuid::new_v4(), "curator", &state().0).unwrap();
        let err = extract(Some(&format!("Bearer {token}x"))).await.unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }
}
