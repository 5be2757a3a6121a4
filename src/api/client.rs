//! HTTP API Client
//!
//! Functions for communicating with the back-office REST API. Authenticated
//! calls take an explicit [`Session`] and attach its bearer token; every
//! non-2xx response funnels through [`error_from_response`], so the 401
//! branch exists in exactly one place.

use gloo_net::http::{Request, Response};

use crate::auth::session::{self, Session};
use crate::state::global::Position;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("backoffice_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("backoffice_api_url", url);
        }
    }
}

/// Failure modes of an API call. Pages translate these into user-facing
/// messages; `Unauthorized` additionally ends the session wherever it
/// surfaces.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// HTTP 401: the stored token is no longer accepted
    #[error("session expired")]
    Unauthorized,
    /// HTTP 404
    #[error("not found")]
    NotFound,
    /// Login response carried no token, or one too short to be real
    #[error("login token missing or too short")]
    RejectedToken,
    /// Other non-2xx, with the server-provided message when there is one
    #[error("{0}")]
    Api(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Map a non-2xx response to an [`Error`]. Reads the body only for the
/// generic case, where the server message is worth surfacing.
async fn error_from_response(response: &Response) -> Error {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        error: Option<String>,
    }

    match response.status() {
        401 => Error::Unauthorized,
        404 => Error::NotFound,
        _ => {
            let body: Option<ErrorBody> = response.json().await.ok();
            let message = body
                .and_then(|b| b.message.or(b.error))
                .unwrap_or_else(|| "Request failed".to_string());
            Error::Api(message)
        }
    }
}

// ============ Auth ============

/// Exchange credentials for a bearer token.
///
/// The token is returned only if the response is 2xx and the token passes
/// the plausibility gate; a 2xx body without a usable token is still a
/// failed login.
pub async fn login(username: &str, password: &str, email: &str) -> Result<String, Error> {
    #[derive(serde::Serialize)]
    struct LoginRequest<'a> {
        username: &'a str,
        password: &'a str,
        email: &'a str,
    }

    #[derive(Default, serde::Deserialize)]
    struct LoginResponse {
        #[serde(rename = "accessToken", default)]
        access_token: Option<String>,
        #[serde(default)]
        message: Option<String>,
    }

    let response = Request::post(&format!("{}/auth/login", get_api_base()))
        .json(&LoginRequest { username, password, email })
        .map_err(|e| Error::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if response.status() == 404 {
        return Err(Error::NotFound);
    }

    // Read the body even on failure: it may carry a message
    let body: LoginResponse = response.json().await.unwrap_or_default();

    if !response.ok() {
        return Err(Error::Api(
            body.message.unwrap_or_else(|| "Invalid login".to_string()),
        ));
    }

    match body.access_token {
        Some(token) if session::token_is_plausible(&token) => Ok(token),
        _ => Err(Error::RejectedToken),
    }
}

/// Create a new account.
pub async fn register(username: &str, password: &str, email: &str) -> Result<(), Error> {
    #[derive(serde::Serialize)]
    struct RegisterRequest<'a> {
        username: &'a str,
        password: &'a str,
        email: &'a str,
    }

    let response = Request::post(&format!("{}/auth/register", get_api_base()))
        .json(&RegisterRequest { username, password, email })
        .map_err(|e| Error::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(&response).await);
    }

    Ok(())
}

// ============ Positions ============

/// Payload for create and update; the server assigns and keeps the id.
#[derive(serde::Serialize)]
struct PositionPayload<'a> {
    position_code: &'a str,
    position_name: &'a str,
}

/// Fetch the full positions collection.
pub async fn list_positions(session: &Session) -> Result<Vec<Position>, Error> {
    let response = Request::get(&format!("{}/positions", get_api_base()))
        .header("Authorization", &session.bearer())
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(&response).await);
    }

    response
        .json()
        .await
        .map_err(|e| Error::Parse(e.to_string()))
}

/// Create a new position.
pub async fn create_position(
    session: &Session,
    code: &str,
    name: &str,
) -> Result<Position, Error> {
    let response = Request::post(&format!("{}/positions", get_api_base()))
        .header("Authorization", &session.bearer())
        .json(&PositionPayload { position_code: code, position_name: name })
        .map_err(|e| Error::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(&response).await);
    }

    response
        .json()
        .await
        .map_err(|e| Error::Parse(e.to_string()))
}

/// Update an existing position.
pub async fn update_position(
    session: &Session,
    id: i64,
    code: &str,
    name: &str,
) -> Result<Position, Error> {
    let response = Request::put(&format!("{}/positions/{}", get_api_base(), id))
        .header("Authorization", &session.bearer())
        .json(&PositionPayload { position_code: code, position_name: name })
        .map_err(|e| Error::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(&response).await);
    }

    response
        .json()
        .await
        .map_err(|e| Error::Parse(e.to_string()))
}

/// Delete a position.
pub async fn delete_position(session: &Session, id: i64) -> Result<(), Error> {
    let response = Request::delete(&format!("{}/positions/{}", get_api_base(), id))
        .header("Authorization", &session.bearer())
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(&response).await);
    }

    Ok(())
}
