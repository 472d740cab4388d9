// Error types for the profile gateway.
// Classifies GitHub API failures and carries the HTTP status each one maps to.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid GitHub username")]
    InvalidUsername,

    #[error("GitHub user not found")]
    NotFound,

    /// Any non-2xx other than 404. The wording is shared with the 404 case.
    #[error("GitHub user not found or error occurred: {}", status_label(.status))]
    Upstream { status: StatusCode },

    #[error("{context}")]
    Unparsable {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("GitHub API request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl ServiceError {
    /// HTTP status the gateway answers with for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidUsername => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Upstream { status } => *status,
            ServiceError::Unparsable { .. } => StatusCode::BAD_GATEWAY,
            ServiceError::Transport(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            ServiceError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Whether the upstream confirmed the user does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound)
    }
}

/// `500 INTERNAL_SERVER_ERROR` style label; just the code when the status
/// has no registered reason.
fn status_label(status: &StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => {
            let name: String = reason
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
                .map(|c| match c {
                    ' ' | '-' => '_',
                    c => c.to_ascii_uppercase(),
                })
                .collect();
            format!("{} {}", status.as_u16(), name)
        }
        None => status.as_u16().to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
