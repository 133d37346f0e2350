//! Authentication endpoint client for Travily.
//!
//! Covers anonymous session creation, token verification, login, and
//! registration against the account backend. Login and register forward
//! the current anonymous id so the backend can adopt prior activity.

use serde::{Deserialize, Serialize};

use crate::types::errors::FetchError;
use crate::types::session::AuthUser;

/// Response shape of `POST /api/auth/anonymous`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymousSession {
    pub token: String,
    pub anonymous_id: String,
}

/// Response shape of `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    anonymous_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    anonymous_id: Option<&'a str>,
}

/// Client for the backend's authentication endpoints.
pub struct AuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl AuthApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a new anonymous session. Single attempt; the session
    /// manager owns the retry/backoff policy.
    pub async fn create_anonymous_session(&self) -> Result<AnonymousSession, FetchError> {
        let url = format!("{}/api/auth/anonymous", self.base_url);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .json::<AnonymousSession>()
            .await
            .map_err(|e| FetchError::MalformedBody(e.to_string()))
    }

    /// Checks whether a persisted token is still accepted by the backend.
    pub async fn verify(&self, token: &str) -> Result<bool, FetchError> {
        let url = format!("{}/api/auth/verify", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(response.status().is_success())
    }

    /// Logs in with account credentials.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        anonymous_id: Option<&str>,
    ) -> Result<AuthSession, FetchError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let request = LoginRequest {
            email,
            password,
            anonymous_id,
        };
        self.post_auth(&url, &request).await
    }

    /// Registers a new account.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        anonymous_id: Option<&str>,
    ) -> Result<AuthSession, FetchError> {
        let url = format!("{}/api/auth/register", self.base_url);
        let request = RegisterRequest {
            username,
            email,
            password,
            anonymous_id,
        };
        self.post_auth(&url, &request).await
    }

    async fn post_auth<T: Serialize>(
        &self,
        url: &str,
        request: &T,
    ) -> Result<AuthSession, FetchError> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .json::<AuthSession>()
            .await
            .map_err(|e| FetchError::MalformedBody(e.to_string()))
    }
}
