// GitHub API endpoint functions.
// The two raw user lookups the gateway combines into one profile.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

use super::UpstreamApi;
use super::client::GitHubClient;

#[async_trait]
impl UpstreamApi for GitHubClient {
    async fn fetch_profile_json(&self, username: &str) -> Result<Bytes> {
        self.get(&format!("/users/{}", username)).await
    }

    async fn fetch_repositories_json(&self, username: &str) -> Result<Bytes> {
        self.get(&format!("/users/{}/repos", username)).await
    }
}
