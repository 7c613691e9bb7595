//! Authentication seam.
//!
//! Identity verification is an external collaborator: the service hands a
//! bearer token to an `IdentityProvider` and gets back an opaque user record.
//! The production implementation calls a configured verification endpoint;
//! when none is configured the allow-all dev verifier is used (with a loud
//! startup warning from `main`). Protocol details live behind the seam.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// Authenticated user record as returned by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token rejected")]
    Rejected,

    #[error("identity provider unreachable: {0}")]
    Unreachable(String),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<AuthUser, AuthError>;
}

/// Verifies bearer tokens against an external HTTP endpoint.
/// The endpoint receives `{"token": "..."}` and answers with an `AuthUser`
/// body on success, any non-2xx status on rejection.
pub struct HttpTokenVerifier {
    client: reqwest::Client,
    verify_url: String,
}

impl HttpTokenVerifier {
    pub fn new(verify_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            verify_url,
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpTokenVerifier {
    async fn authenticate(&self, token: &str) -> Result<AuthUser, AuthError> {
        if token.is_empty() {
            return Err(AuthError::Rejected);
        }

        let response = self
            .client
            .post(&self.verify_url)
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected);
        }

        response
            .json::<AuthUser>()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))
    }
}

/// Dev-only verifier used when no AUTH_VERIFY_URL is configured.
/// Accepts every request as an anonymous user.
pub struct AllowAllVerifier;

#[async_trait]
impl IdentityProvider for AllowAllVerifier {
    async fn authenticate(&self, _token: &str) -> Result<AuthUser, AuthError> {
        Ok(AuthUser {
            uid: "anonymous".to_string(),
            email: None,
        })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .unwrap_or("");

        state.identity.authenticate(token).await.map_err(|e| {
            warn!("authentication failed: {e}");
            AppError::Unauthorized
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_allow_all_accepts_empty_token() {
        let user = AllowAllVerifier.authenticate("").await.unwrap();
        assert_eq!(user.uid, "anonymous");
    }

    #[tokio::test]
    async fn test_http_verifier_rejects_empty_token_without_network() {
        let verifier = HttpTokenVerifier::new("http://127.0.0.1:1/verify".to_string());
        assert!(matches!(
            verifier.authenticate("").await,
            Err(AuthError::Rejected)
        ));
    }

    #[test]
    fn test_auth_user_deserializes_without_email() {
        let user: AuthUser = serde_json::from_str(r#"{"uid": "u-1"}"#).unwrap();
        assert_eq!(user.uid, "u-1");
        assert!(user.email.is_none());
    }
}
