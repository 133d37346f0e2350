//! User history endpoint client for Travily.
//!
//! Fetches an authenticated user's saved search history from the backend.
//! One attempt per call — the cache owns the decision to never retry.

use serde::Deserialize;

use crate::types::errors::FetchError;

/// Response shape of `GET /api/user/history`.
#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    history: Vec<String>,
}

/// Client for the backend's user-history endpoint.
pub struct HistoryApi {
    client: reqwest::Client,
    base_url: String,
}

impl HistoryApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the authenticated user's saved history.
    ///
    /// # Errors
    /// Returns `FetchError` on connection failure, non-success status, or
    /// a body that is not the expected `{ "history": [string] }` shape.
    pub async fn fetch_history(&self, token: &str) -> Result<Vec<String>, FetchError> {
        let url = format!("{}/api/user/history", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_history_body(&body)
    }
}

/// Parses a history response body into the list of saved search terms.
pub fn parse_history_body(body: &str) -> Result<Vec<String>, FetchError> {
    let parsed: HistoryResponse =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedBody(e.to_string()))?;
    Ok(parsed.history)
}
