use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of characters in a persisted character identifier.
///
/// The API hands out database object ids, which are 24 hex digits. Clients only
/// check the length; the server decides whether an id actually exists.
pub const CHARACTER_ID_LEN: usize = 24;

/// A generated or loaded character sheet.
///
/// The document is opaque to the client: it is received from the API, edited
/// field by field in the browser and posted back unchanged otherwise. Keeping it
/// as a `serde_json::Value` means new server-side fields survive a round trip
/// through the client without a schema change here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Character(Value);

impl Character {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.0
    }
}

/// Reasons an identifier typed by the user is rejected before any request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CharacterIdError {
    #[error("Character ID is empty")]
    Empty,

    #[error("Character ID must be {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Identifier of a character that has been persisted by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    /// Validates an identifier coming from user input or from the page path.
    ///
    /// Only the length is checked. Surrounding whitespace is not trimmed: a
    /// pasted id with a trailing space is reported as the wrong length.
    pub fn parse(raw: &str) -> Result<Self, CharacterIdError> {
        let actual = raw.chars().count();
        match actual {
            0 => Err(CharacterIdError::Empty),
            CHARACTER_ID_LEN => Ok(Self(raw.to_string())),
            _ => Err(CharacterIdError::WrongLength {
                expected: CHARACTER_ID_LEN,
                actual,
            }),
        }
    }

    /// Wraps an id assigned by the server. The server is authoritative, so no
    /// validation is applied.
    pub fn from_server(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
