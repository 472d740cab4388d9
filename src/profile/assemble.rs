// Profile assembly.
// Fetches the user and repository payloads and combines them into one Profile.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, ServiceError};
use crate::github::{Repository, UpstreamApi, User};

use super::model::Profile;

const USER_PARSE_ERROR: &str = "Failed to parse GitHub user info response";
const REPOS_PARSE_ERROR: &str = "Failed to parse GitHub repository list response";

/// Build the full profile for `username`.
///
/// The two upstream calls run one after the other. The first failure, either
/// a fetch or a parse, is returned as-is and nothing partial escapes.
pub async fn assemble(upstream: &dyn UpstreamApi, username: &str) -> Result<Profile> {
    let body = upstream.fetch_profile_json(username).await?;
    let user: User = parse(&body, USER_PARSE_ERROR)?;
    let profile = Profile::from_user(user).ok_or_else(missing_login)?;

    let body = upstream.fetch_repositories_json(username).await?;
    let repositories: Option<Vec<Repository>> = parse(&body, REPOS_PARSE_ERROR)?;

    debug!(
        username = profile.username(),
        repositories = repositories.as_ref().map_or(0, Vec::len),
        "profile assembled"
    );
    Ok(profile.with_repositories(repositories))
}

fn parse<T: DeserializeOwned>(body: &[u8], context: &'static str) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| ServiceError::Unparsable { context, source })
}

fn missing_login() -> ServiceError {
    ServiceError::Unparsable {
        context: USER_PARSE_ERROR,
        source: serde::de::Error::missing_field("login"),
    }
}
