//! State of the character page.
//!
//! The page tracks four independent things: the character document (absent
//! while the first fetch runs), the failure of the path-driven load, whether
//! the document has a server id, and which dialog is open. The last two are
//! enums so that "saved without an id" and "both dialogs open" cannot be
//! represented.

use common::model::character::{Character, CharacterId};

use crate::config::PageConfig;

/// A character that has an id on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedCharacter {
    pub id: CharacterId,
    /// Link that reopens this character.
    pub share_url: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    /// Id entry, with the last failure.
    Load { error: Option<String> },
    /// Share link, or the reason saving failed.
    Save { error: Option<String> },
}

/// Overall status of the page, derived from [`CharacterPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<'a> {
    Loading,
    Loaded,
    LoadDialogOpen,
    SaveDialogOpen,
    Error(&'a str),
}

pub struct CharacterPage {
    pub page: PageConfig,
    pub character: Option<Character>,
    /// Failure of the load started from the page path.
    pub load_error: Option<String>,
    pub saved: Option<SavedCharacter>,
    pub dialog: Dialog,
    /// Text of the load dialog's id field. Kept when the dialog is reopened or
    /// swapped for the save dialog; cleared by closing.
    pub load_input: String,
    /// Guard so the path is only resolved on the first render.
    pub initialized: bool,
}

impl CharacterPage {
    pub fn new(page: PageConfig) -> Self {
        Self {
            page,
            character: None,
            load_error: None,
            saved: None,
            dialog: Dialog::Closed,
            load_input: String::new(),
            initialized: false,
        }
    }

    pub fn already_saved(&self) -> bool {
        self.saved.is_some()
    }

    pub fn id(&self) -> Option<&CharacterId> {
        self.saved.as_ref().map(|saved| &saved.id)
    }

    /// Error shown inside whichever dialog is open.
    pub fn dialog_error(&self) -> Option<&str> {
        match &self.dialog {
            Dialog::Load { error } | Dialog::Save { error } => error.as_deref(),
            Dialog::Closed => None,
        }
    }

    /// Reports `message` in the open dialog. Dropped when no dialog is open,
    /// since the user already dismissed the action it belongs to.
    pub fn set_dialog_error(&mut self, message: Option<String>) {
        match &mut self.dialog {
            Dialog::Load { error } | Dialog::Save { error } => *error = message,
            Dialog::Closed => {}
        }
    }

    pub fn phase(&self) -> Phase<'_> {
        match &self.dialog {
            Dialog::Load { .. } => Phase::LoadDialogOpen,
            Dialog::Save { .. } => Phase::SaveDialogOpen,
            Dialog::Closed => match (&self.load_error, &self.character) {
                (Some(message), _) => Phase::Error(message),
                (None, Some(_)) => Phase::Loaded,
                (None, None) => Phase::Loading,
            },
        }
    }
}
