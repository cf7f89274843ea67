//! Envelopes exchanged with the `/api/v1/characters` endpoints.
//!
//! The API uses PascalCase keys and, on success, may still send the error key as
//! `null` (and the other way round), so every field is optional on the wire.

use serde::{Deserialize, Serialize};

use crate::model::character::Character;

/// Body of `GET /api/v1/characters` and `GET /api/v1/characters/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CharacterResponse {
    #[serde(rename = "Character", default)]
    pub character: Option<Character>,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of a successful `POST /api/v1/characters`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(rename = "ID", default)]
    pub id: Option<String>,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body sent alongside any non-2xx status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}
