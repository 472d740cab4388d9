// In-memory stand-in for the GitHub API.
// Lets assembler and gateway tests script each endpoint's reply.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;

use crate::error::{Result, ServiceError};

use super::UpstreamApi;

pub const OCTOCAT_JSON: &str = r#"{
    "login": "octocat",
    "id": 583231,
    "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
    "url": "https://api.github.com/users/octocat",
    "type": "User",
    "name": "The Octocat",
    "company": "@github",
    "location": "San Francisco",
    "email": null,
    "created_at": "2011-01-25T18:44:36Z"
}"#;

pub const OCTOCAT_REPOS_JSON: &str = r#"[
    {"id": 1296269, "name": "Hello-World", "url": "https://api.github.com/repos/octocat/Hello-World", "fork": false},
    {"id": 132935648, "name": "boysenberry-repo-1", "url": "https://api.github.com/repos/octocat/boysenberry-repo-1", "fork": true}
]"#;

/// Scripted reply for one endpoint.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Status(StatusCode),
}

impl Reply {
    pub fn body(body: &str) -> Self {
        Reply::Body(body.to_string())
    }

    fn produce(&self) -> Result<Bytes> {
        match self {
            Reply::Body(body) => Ok(Bytes::from(body.clone())),
            Reply::Status(StatusCode::NOT_FOUND) => Err(ServiceError::NotFound),
            Reply::Status(status) => Err(ServiceError::Upstream { status: *status }),
        }
    }
}

/// Upstream double with one mutable reply per endpoint.
pub struct StubUpstream {
    profile: Mutex<Reply>,
    repos: Mutex<Reply>,
    profile_calls: AtomicUsize,
    repos_calls: AtomicUsize,
}

impl StubUpstream {
    pub fn new(profile: Reply, repos: Reply) -> Self {
        Self {
            profile: Mutex::new(profile),
            repos: Mutex::new(repos),
            profile_calls: AtomicUsize::new(0),
            repos_calls: AtomicUsize::new(0),
        }
    }

    /// Both endpoints answer with the octocat fixtures.
    pub fn octocat() -> Self {
        Self::new(Reply::body(OCTOCAT_JSON), Reply::body(OCTOCAT_REPOS_JSON))
    }

    /// Both endpoints fail with the given status.
    pub fn failing(status: StatusCode) -> Self {
        Self::new(Reply::Status(status), Reply::Status(status))
    }

    pub fn set_profile(&self, reply: Reply) {
        *self.profile.lock().unwrap() = reply;
    }

    pub fn set_repos(&self, reply: Reply) {
        *self.repos.lock().unwrap() = reply;
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    pub fn repos_calls(&self) -> usize {
        self.repos_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamApi for StubUpstream {
    async fn fetch_profile_json(&self, _username: &str) -> Result<Bytes> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profile.lock().unwrap().produce()
    }

    async fn fetch_repositories_json(&self, _username: &str) -> Result<Bytes> {
        self.repos_calls.fetch_add(1, Ordering::SeqCst);
        self.repos.lock().unwrap().produce()
    }
}
