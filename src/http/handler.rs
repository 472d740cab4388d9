//! Axum router and request handlers for the profile gateway.
//!
//! Routes:
//! - `GET /users/{username}` - Profile with repositories, or an error body
//! - `GET /users/`           - Blank username (always 400)
//! - `GET /healthz`          - Liveness and cache size
//!
//! Unmatched paths and methods answer with a JSON `error` body as well.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::ServiceError;
use crate::gateway::{Lookup, ProfileGateway};
use crate::profile::Profile;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the axum [`Router`] over a shared gateway.
pub fn create_router(gateway: ProfileGateway) -> Router {
    Router::new()
        .route("/users/{username}", get(handle_get_user))
        .route("/users/", get(handle_blank_user))
        .route("/healthz", get(handle_health))
        .fallback(handle_unmatched_route)
        .method_not_allowed_fallback(handle_unmatched_method)
        .with_state(gateway)
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// Body of every non-200 response. Validation failures carry only `error`;
/// routing failures omit `cached`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Profile>,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cached: Option<bool>,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    cached_profiles: usize,
}

impl IntoResponse for Lookup {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Lookup::Fresh(profile) => (status, Json(profile)).into_response(),
            Lookup::Invalid => (
                status,
                Json(ErrorBody {
                    data: None,
                    error: ServiceError::InvalidUsername.to_string(),
                    status: None,
                    cached: None,
                }),
            )
                .into_response(),
            Lookup::NotFound => (
                status,
                Json(ErrorBody {
                    data: None,
                    error: ServiceError::NotFound.to_string(),
                    status: Some(status.as_u16()),
                    cached: Some(false),
                }),
            )
                .into_response(),
            Lookup::Degraded { error, cached } => {
                let is_cached = cached.is_some();
                (
                    status,
                    Json(ErrorBody {
                        data: cached,
                        error: error.to_string(),
                        status: Some(status.as_u16()),
                        cached: Some(is_cached),
                    }),
                )
                    .into_response()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /users/{username}`
///
/// A segment that does not decode to UTF-8 is an invalid username, not a
/// routing error.
async fn handle_get_user(
    State(gateway): State<ProfileGateway>,
    username: Result<Path<String>, PathRejection>,
) -> Lookup {
    match username {
        Ok(Path(username)) => lookup_user(&gateway, &username).await,
        Err(rejection) => {
            debug!(error = %rejection, "rejected undecodable username");
            Lookup::Invalid
        }
    }
}

#[instrument(skip(gateway))]
async fn lookup_user(gateway: &ProfileGateway, username: &str) -> Lookup {
    gateway.lookup(username).await
}

/// `GET /users/` with the username segment left empty.
async fn handle_blank_user(State(gateway): State<ProfileGateway>) -> Lookup {
    gateway.lookup("").await
}

/// `GET /healthz`
async fn handle_health(State(gateway): State<ProfileGateway>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthBody {
            status: "ok",
            cached_profiles: gateway.cache().len(),
        }),
    )
}

fn plain_error(status: StatusCode) -> Response {
    (
        status,
        Json(ErrorBody {
            data: None,
            error: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            status: Some(status.as_u16()),
            cached: None,
        }),
    )
        .into_response()
}

async fn handle_unmatched_route() -> Response {
    plain_error(StatusCode::NOT_FOUND)
}

async fn handle_unmatched_method() -> Response {
    plain_error(StatusCode::METHOD_NOT_ALLOWED)
}
