// Assembled profile record.
// The JSON document served for a username, and what the cache holds.

use std::sync::Arc;

use serde::Serialize;

use crate::github::{Repository, User};

use super::date::format_created_at;

/// GitHub user profile combined with its repository list.
///
/// Fields are read-only once built. The repository list is shared behind an
/// `Arc<[Repository]>`, so handing a cached profile to a response clones a
/// pointer rather than the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    #[serde(rename = "user_name")]
    username: String,
    display_name: Option<String>,
    avatar: Option<String>,
    geo_location: Option<String>,
    email: Option<String>,
    url: Option<String>,
    created_at: Option<String>,
    repositories: Option<Arc<[Repository]>>,
}

impl Profile {
    /// Map an upstream user payload onto a profile.
    ///
    /// Returns `None` when `login` is missing or empty.
    pub fn from_user(user: User) -> Option<Self> {
        let username = user.login.filter(|login| !login.is_empty())?;
        Some(Self {
            username,
            display_name: user.name,
            avatar: user.avatar_url,
            geo_location: user.location,
            email: user.email,
            url: user.url,
            created_at: user.created_at.map(|raw| format_created_at(&raw)),
            repositories: None,
        })
    }

    /// Attach the repository list, replacing any previous one. `None`
    /// records an upstream `null` list.
    pub fn with_repositories(mut self, repositories: Option<Vec<Repository>>) -> Self {
        self.repositories = repositories.map(Into::into);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn geo_location(&self) -> Option<&str> {
        self.geo_location.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    /// Read-only view of the repositories, if they were attached.
    pub fn repositories(&self) -> Option<&[Repository]> {
        self.repositories.as_deref()
    }
}
