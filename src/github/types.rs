// GitHub API response types.
// Defines the subset of the user and repository payloads the gateway reads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// GitHub user as returned by `/users/{username}`.
///
/// Only the fields the gateway exposes are modeled; anything else in the
/// payload is ignored. A JSON `null` and a missing key both land as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient_string")]
    pub login: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
}

/// GitHub repository, projected down to its name and API URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
}

/// Read a scalar as text: numbers and booleans are stringified, while
/// `null`, arrays and objects become `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_null_and_missing_fields() {
        let user: User = serde_json::from_str(
            r#"{"login":"octocat","name":null,"id":583231,"type":"User"}"#,
        )
        .unwrap();
        assert_eq!(user.login.as_deref(), Some("octocat"));
        assert!(user.name.is_none());
        assert!(user.email.is_none());
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_user_scalars_read_as_text() {
        let user: User = serde_json::from_str(
            r#"{"login":"octocat","name":123,"location":true,"email":{"x":1}}"#,
        )
        .unwrap();
        assert_eq!(user.name.as_deref(), Some("123"));
        assert_eq!(user.location.as_deref(), Some("true"));
        assert!(user.email.is_none());
    }

    #[test]
    fn test_repository_ignores_unknown_fields() {
        let repos: Vec<Repository> = serde_json::from_str(
            r#"[{"id":1296269,"name":"Hello-World","full_name":"octocat/Hello-World",
                "url":"https://api.github.com/repos/octocat/Hello-World","private":false,
                "owner":{"login":"octocat"}}]"#,
        )
        .unwrap();
        assert_eq!(
            repos,
            vec![Repository {
                name: Some("Hello-World".to_string()),
                url: Some("https://api.github.com/repos/octocat/Hello-World".to_string()),
            }]
        );
    }

    #[test]
    fn test_repository_null_and_missing_fields() {
        let repos: Vec<Repository> =
            serde_json::from_str(r#"[{"name":"x","url":null},{"id":7}]"#).unwrap();
        assert_eq!(repos[0].name.as_deref(), Some("x"));
        assert!(repos[0].url.is_none());
        assert_eq!(repos[1], Repository::default());
    }
}
