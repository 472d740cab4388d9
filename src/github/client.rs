// GitHub API HTTP client.
// Issues unauthenticated GET requests and classifies failed responses.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::error::{Result, ServiceError};

const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client bound to a single API base URL.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for the configured API base.
    pub fn new(config: &UpstreamConfig) -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL every endpoint is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request to the GitHub API and return the raw body.
    pub async fn get(&self, endpoint: &str) -> Result<Bytes> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "GET upstream");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ServiceError::Transport)?;

        let response = check_response(response)?;
        response.bytes().await.map_err(ServiceError::Transport)
    }
}

/// Check response status and convert errors.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(ServiceError::NotFound),
        status => Err(ServiceError::Upstream { status }),
    }
}
