// GitHub API module.
// Provides the client and payload types for the two user endpoints.

#![allow(dead_code)]

pub mod client;
pub mod endpoints;
#[cfg(test)]
pub mod mock;
pub mod types;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

pub use client::GitHubClient;
pub use types::{Repository, User};

/// Source of raw GitHub user payloads.
///
/// Implementations classify failures into [`ServiceError`](crate::error::ServiceError)
/// but never interpret the body.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Raw body of `/users/{username}`.
    async fn fetch_profile_json(&self, username: &str) -> Result<Bytes>;

    /// Raw body of `/users/{username}/repos`.
    async fn fetch_repositories_json(&self, username: &str) -> Result<Bytes>;
}
