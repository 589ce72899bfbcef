//! Proxy for the third-party "random activity" API.

use crate::error::SourceError;

pub const DEFAULT_API_URL: &str = "https://bored-api.appbrewery.com/random";

#[derive(Debug, Clone)]
pub struct ExternalGoalClient {
    http: reqwest::Client,
    api_url: String,
}

impl ExternalGoalClient {
    pub fn new(http: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
        }
    }

    /// Fetch one random activity, returned verbatim as JSON.
    ///
    /// A `timestamp` query parameter defeats intermediary caches. No retry
    /// and no timeout beyond the client's defaults.
    pub async fn fetch_random(&self) -> Result<serde_json::Value, SourceError> {
        let timestamp = jiff::Timestamp::now().as_millisecond();

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("timestamp", timestamp)])
            .send()
            .await
            .map_err(|e| SourceError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UpstreamStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SourceError::Upstream(e.to_string()))
    }
}
