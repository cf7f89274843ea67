use common::model::character::{Character, CharacterId};

use crate::api::ApiError;

use super::helpers::{FieldPath, FieldValue};

/// Where a load-by-id was started from; decides the share link and where a
/// failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// The id came from the page path when the page mounted.
    Path,
    /// The user typed it into the load dialog.
    Dialog,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// First render: resolve the path and fetch.
    Init,
    NewCharacter,
    Generated(Result<Character, ApiError>),
    LoadModalOpen,
    UpdateInput(String),
    LoadCharacter,
    Loaded {
        id: CharacterId,
        source: LoadSource,
        result: Result<Character, ApiError>,
    },
    Save,
    Saved(Result<CharacterId, ApiError>),
    CloseModal,
    EditField { path: FieldPath, value: FieldValue },
}

/// Calls against the characters API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Generate,
    Load { id: CharacterId, source: LoadSource },
    Save(Character),
}

/// Side effects requested by `update`; executed by the component.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch(ApiCall),
    /// Deliver `msg` back to the page after `delay_ms`.
    After { delay_ms: u32, msg: Msg },
}
