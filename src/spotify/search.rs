use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::{
    config,
    types::{SearchResponse, Track},
};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("catalog request failed: {0}")]
    Remote(#[source] reqwest::Error),
    #[error("credential rejected by the catalog service")]
    Unauthorized,
    #[error("malformed catalog response: {0}")]
    Parse(#[source] reqwest::Error),
}

/// Client for the catalog's `/search` endpoint.
///
/// Performs exactly one remote call per search, authenticated with the
/// bearer credential, and returns tracks in the order the service ranked
/// them. No caching and no retries; identical queries re-issue the call.
pub struct CatalogSearchClient {
    http: Client,
    api_url: String,
}

impl CatalogSearchClient {
    pub fn new() -> Self {
        Self::with_base_url(config::spotify_apiurl())
    }

    pub fn with_base_url(api_url: String) -> Self {
        Self {
            http: Client::new(),
            api_url,
        }
    }

    /// Searches the catalog for tracks matching `query`.
    ///
    /// Callers are expected to have gated out blank queries and a missing
    /// credential beforehand; an expired or revoked credential surfaces as
    /// [`SearchError::Unauthorized`].
    ///
    /// # Errors
    ///
    /// - [`SearchError::Remote`] - network failure or non-success HTTP status
    /// - [`SearchError::Unauthorized`] - the service rejected the credential
    /// - [`SearchError::Parse`] - response body is not the expected shape
    pub async fn search(&self, query: &str, credential: &str) -> Result<Vec<Track>, SearchError> {
        let api_url = format!("{uri}/search", uri = self.api_url);

        let response = self
            .http
            .get(&api_url)
            .query(&[("q", query), ("type", "track")])
            .bearer_auth(credential)
            .send()
            .await
            .map_err(SearchError::Remote)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(SearchError::Unauthorized);
        }

        let response = response.error_for_status().map_err(SearchError::Remote)?;
        let parsed: SearchResponse = response.json().await.map_err(SearchError::Parse)?;

        Ok(parsed.tracks.items)
    }
}

impl Default for CatalogSearchClient {
    fn default() -> Self {
        Self::new()
    }
}
