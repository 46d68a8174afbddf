//! HTTP client for the document-query API.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::query::{QueryRequest, QueryResponse, Resource};

/// Default API base; individual resources carry their own versioned
/// path segment.
pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com";

/// Client for the `POST {resource}/query` endpoint family.
///
/// Cheap to clone and safe to share: the underlying connection pool is
/// reference-counted.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    base_url: String,
}

impl QueryClient {
    /// Create a client against the given base URL (no trailing slash
    /// required).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single document by identifier with the given relations
    /// populated.
    ///
    /// Exactly one of three outcomes:
    /// - the first document of a non-empty `docs` list,
    /// - `ApiError::NotFound` when the list is empty,
    /// - `ApiError::Status` / `ApiError::Transport` when the request
    ///   itself failed.
    pub async fn query_one<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: &str,
        populate: &[&str],
    ) -> ApiResult<T> {
        let url = format!("{}/{}/query", self.base_url, resource.path());
        let body = QueryRequest::by_id(id, populate);
        tracing::debug!(%resource, id, "issuing document query");

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Error")
                    .to_string(),
            });
        }

        let envelope: QueryResponse<T> = response.json().await?;
        envelope.into_first().ok_or(ApiError::NotFound)
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = QueryClient::new("https://api.spacexdata.com/");
        assert_eq!(client.base_url(), "https://api.spacexdata.com");
    }

    #[test]
    fn default_client_targets_public_api() {
        assert_eq!(QueryClient::default().base_url(), DEFAULT_BASE_URL);
    }
}
