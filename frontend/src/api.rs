//! HTTP client for the characters API.
//!
//! Every call resolves to either the decoded payload or an [`ApiError`]. Pages
//! turn the error into a message with [`ApiError::user_message`], preferring the
//! server's own `Error` text when it sent one.

use gloo_net::http::{Request, Response};

use common::model::character::{Character, CharacterId};
use common::requests::{CharacterResponse, ErrorResponse, SaveResponse};

use crate::config::ApiConfig;
use crate::console;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a failure status, or with a body missing the
    /// expected payload.
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show the user: the server's `Error` field when present,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Thin wrapper binding the three endpoints to a configured root.
#[derive(Debug, Clone, PartialEq)]
pub struct CharactersApi {
    config: ApiConfig,
}

impl CharactersApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// `GET {root}`: asks the server to roll a brand new character.
    pub async fn generate(&self) -> Result<Character, ApiError> {
        let url = self.config.collection_url();
        console::debug(&format!("GET {url}"));
        let response = Request::get(&url).send().await?;
        let (status, body) = read_body(response).await?;
        character_outcome(status, &body)
    }

    /// `GET {root}/{id}`
    pub async fn load(&self, id: &CharacterId) -> Result<Character, ApiError> {
        let url = self.config.character_url(id);
        console::debug(&format!("GET {url}"));
        let response = Request::get(&url).send().await?;
        let (status, body) = read_body(response).await?;
        character_outcome(status, &body)
    }

    /// `POST {root}` with the full document; returns the id assigned by the
    /// server.
    pub async fn save(&self, character: &Character) -> Result<CharacterId, ApiError> {
        let url = self.config.collection_url();
        console::debug(&format!("POST {url}"));
        let response = Request::post(&url).json(character)?.send().await?;
        let (status, body) = read_body(response).await?;
        save_outcome(status, &body)
    }
}

async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Maps a generate or load response to the character it carries.
///
/// A success status whose body has no `Character` is still a failure, with
/// the body's `Error` text when there is one.
pub fn character_outcome(status: u16, body: &str) -> Result<Character, ApiError> {
    if !is_success(status) {
        return Err(failure(status, body));
    }

    let body: CharacterResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    body.character.ok_or(ApiError::Server {
        status,
        message: body.error,
    })
}

/// Maps a save response to the id assigned by the server.
pub fn save_outcome(status: u16, body: &str) -> Result<CharacterId, ApiError> {
    if !is_success(status) {
        return Err(failure(status, body));
    }

    let body: SaveResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    match body.id {
        Some(id) => Ok(CharacterId::from_server(id)),
        None => Err(ApiError::Server {
            status,
            message: body.error,
        }),
    }
}

/// Builds the error for a non-2xx response, keeping the `Error` message when
/// the body carries one.
fn failure(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(body) => body.error,
        Err(err) => {
            console::warn(&format!("status {status} with unreadable body: {err}"));
            None
        }
    };
    ApiError::Server { status, message }
}
