// Profile lookup orchestration.
// Validates the username, assembles a fresh profile, and applies the stale-cache fallback.

use std::sync::Arc;

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::cache::ProfileCache;
use crate::error::ServiceError;
use crate::github::UpstreamApi;
use crate::profile::{Profile, assemble};

use super::username::is_valid_username;

/// Outcome of a single profile lookup.
#[derive(Debug)]
pub enum Lookup {
    /// Fresh profile; the cache now holds it.
    Fresh(Profile),
    /// Username failed validation. Nothing was fetched.
    Invalid,
    /// GitHub reports no such user. The cache is deliberately not consulted.
    NotFound,
    /// Any other failure, with the last good profile if one is cached.
    Degraded {
        error: ServiceError,
        cached: Option<Profile>,
    },
}

impl Lookup {
    /// HTTP status for this outcome.
    pub fn status(&self) -> StatusCode {
        match self {
            Lookup::Fresh(_) => StatusCode::OK,
            Lookup::Invalid => StatusCode::BAD_REQUEST,
            Lookup::NotFound => StatusCode::NOT_FOUND,
            Lookup::Degraded { error, .. } => error.status(),
        }
    }
}

/// Resolves usernames to profiles, owning the cache it falls back on.
#[derive(Clone)]
pub struct ProfileGateway {
    upstream: Arc<dyn UpstreamApi>,
    cache: ProfileCache,
}

impl ProfileGateway {
    pub fn new(upstream: Arc<dyn UpstreamApi>, cache: ProfileCache) -> Self {
        Self { upstream, cache }
    }

    pub fn cache(&self) -> &ProfileCache {
        &self.cache
    }

    /// Look up `username`, deciding between fresh data, cached data, or an error.
    pub async fn lookup(&self, username: &str) -> Lookup {
        if !is_valid_username(username) {
            debug!("rejected invalid username");
            return Lookup::Invalid;
        }

        match assemble(self.upstream.as_ref(), username).await {
            Ok(profile) => {
                self.cache.put(username, profile.clone());
                debug!(cached_profiles = self.cache.len(), "cache updated");
                Lookup::Fresh(profile)
            }
            Err(error) if error.is_not_found() => Lookup::NotFound,
            Err(error) => {
                let cached = self.cache.get(username);
                match &cached {
                    Some(entry) => warn!(
                        error = %error,
                        status = error.status().as_u16(),
                        cached_age_secs = entry.age().as_secs(),
                        "upstream failed, serving cached profile"
                    ),
                    None => warn!(
                        error = %error,
                        status = error.status().as_u16(),
                        "upstream failed, no cached profile"
                    ),
                }
                Lookup::Degraded {
                    error,
                    cached: cached.map(|entry| entry.data),
                }
            }
        }
    }
}
