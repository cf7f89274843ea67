//! Update function for the character page.
//!
//! `update` is pure: it mutates [`CharacterPage`] and returns the commands the
//! component must run. A message that must not touch the network simply
//! returns no `Command::Fetch`.

use common::model::character::CharacterId;

use crate::console;
use crate::route::{self, CharacterRoute};

use super::helpers::{
    apply_edit, GENERATE_FALLBACK, INVALID_ID, LOAD_DIALOG_AUTO_CLOSE_MS, LOAD_FALLBACK,
    MISSING_ID, NOT_LOADED_YET, SAVE_FALLBACK,
};
use super::messages::{ApiCall, Command, LoadSource, Msg};
use super::state::{CharacterPage, Dialog, SavedCharacter};

pub fn update(page: &mut CharacterPage, msg: Msg) -> Vec<Command> {
    match msg {
        Msg::Init => match route::resolve(&page.page.path) {
            CharacterRoute::Generate => generate(page),
            CharacterRoute::Load(id) => vec![Command::Fetch(ApiCall::Load {
                id,
                source: LoadSource::Path,
            })],
            CharacterRoute::InvalidId => {
                page.load_error = Some(MISSING_ID.to_string());
                vec![]
            }
        },
        Msg::NewCharacter => generate(page),
        Msg::Generated(Ok(character)) => {
            console::debug(&format!("generated character: {}", character.as_value()));
            page.character = Some(character);
            vec![]
        }
        Msg::Generated(Err(err)) => {
            console::warn(&format!("generating character failed: {err}"));
            page.load_error = Some(err.user_message(GENERATE_FALLBACK));
            vec![]
        }
        Msg::LoadModalOpen => {
            page.dialog = Dialog::Load { error: None };
            vec![]
        }
        Msg::UpdateInput(text) => {
            if matches!(page.dialog, Dialog::Load { .. }) {
                page.load_input = text;
            }
            vec![]
        }
        Msg::LoadCharacter => {
            let Dialog::Load { error } = &mut page.dialog else {
                return vec![];
            };
            match CharacterId::parse(&page.load_input) {
                Ok(id) => vec![Command::Fetch(ApiCall::Load {
                    id,
                    source: LoadSource::Dialog,
                })],
                Err(_) => {
                    *error = Some(INVALID_ID.to_string());
                    vec![]
                }
            }
        }
        Msg::Loaded {
            id,
            source,
            result: Ok(character),
        } => {
            console::debug(&format!("loaded character {id}: {}", character.as_value()));
            let share_url = match source {
                LoadSource::Path => page.page.current_url(),
                LoadSource::Dialog => page.page.share_url(&id),
            };
            page.character = Some(character);
            page.saved = Some(SavedCharacter { id, share_url });
            match source {
                LoadSource::Path => vec![],
                LoadSource::Dialog => vec![Command::After {
                    delay_ms: LOAD_DIALOG_AUTO_CLOSE_MS,
                    msg: Msg::CloseModal,
                }],
            }
        }
        Msg::Loaded {
            id,
            source,
            result: Err(err),
        } => {
            console::warn(&format!("loading character {id} failed: {err}"));
            let message = err.user_message(LOAD_FALLBACK);
            match source {
                LoadSource::Path => page.load_error = Some(message),
                LoadSource::Dialog => page.set_dialog_error(Some(message)),
            }
            vec![]
        }
        Msg::Save => {
            page.dialog = Dialog::Save { error: None };
            if page.already_saved() {
                vec![]
            } else if let Some(character) = &page.character {
                vec![Command::Fetch(ApiCall::Save(character.clone()))]
            } else {
                page.set_dialog_error(Some(NOT_LOADED_YET.to_string()));
                vec![]
            }
        }
        Msg::Saved(Ok(id)) => {
            console::debug(&format!("saved character as {id}"));
            let share_url = page.page.share_url(&id);
            page.saved = Some(SavedCharacter { id, share_url });
            vec![]
        }
        Msg::Saved(Err(err)) => {
            console::warn(&format!("saving character failed: {err}"));
            page.saved = None;
            page.set_dialog_error(Some(err.user_message(SAVE_FALLBACK)));
            vec![]
        }
        Msg::CloseModal => {
            page.dialog = Dialog::Closed;
            page.load_input.clear();
            page.load_error = None;
            vec![]
        }
        Msg::EditField { path, value } => {
            if let Some(character) = &mut page.character {
                if !apply_edit(character.as_value_mut(), &path, value) {
                    console::debug("ignored edit that does not fit the field");
                }
            }
            vec![]
        }
    }
}

/// Starts over with a freshly generated character.
fn generate(page: &mut CharacterPage) -> Vec<Command> {
    page.saved = None;
    page.load_error = None;
    vec![Command::Fetch(ApiCall::Generate)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::components::character::helpers::{FieldValue, PathSegment};
    use crate::components::character::state::Phase;
    use crate::config::PageConfig;
    use common::model::character::Character;
    use serde_json::json;

    const ID: &str = "abcdefghijklmnopqrstuvwx";
    const ORIGIN: &str = "https://dg.example";

    fn page_at(path: &str) -> CharacterPage {
        CharacterPage::new(PageConfig::new(ORIGIN, path))
    }

    fn agent() -> Character {
        Character::new(json!({ "Class": "Federal Agent", "Stats": { "Power": 11 } }))
    }

    fn id() -> CharacterId {
        CharacterId::parse(ID).unwrap()
    }

    fn server_error(message: &str) -> ApiError {
        ApiError::Server {
            status: 400,
            message: Some(message.to_string()),
        }
    }

    fn has_fetch(commands: &[Command]) -> bool {
        commands.iter().any(|c| matches!(c, Command::Fetch(_)))
    }

    fn loaded_page() -> CharacterPage {
        let mut page = page_at("/character/");
        update(&mut page, Msg::Init);
        update(&mut page, Msg::Generated(Ok(agent())));
        page
    }

    fn assert_saved_matches_id(page: &CharacterPage) {
        assert_eq!(page.already_saved(), page.id().is_some());
    }

    #[test]
    fn init_on_character_id_path_loads_it() {
        let mut page = page_at(&format!("/character/{ID}"));
        let commands = update(&mut page, Msg::Init);
        assert_eq!(
            commands,
            vec![Command::Fetch(ApiCall::Load {
                id: id(),
                source: LoadSource::Path
            })]
        );
        assert_eq!(page.phase(), Phase::Loading);

        let commands = update(
            &mut page,
            Msg::Loaded {
                id: id(),
                source: LoadSource::Path,
                result: Ok(agent()),
            },
        );
        assert!(commands.is_empty());
        assert_eq!(page.character, Some(agent()));
        assert_eq!(page.id(), Some(&id()));
        assert!(page.already_saved());
        assert_eq!(
            page.saved.as_ref().unwrap().share_url,
            format!("{ORIGIN}/character/{ID}")
        );
        assert_eq!(page.phase(), Phase::Loaded);
    }

    #[test]
    fn init_on_bare_character_path_generates() {
        let mut page = page_at("/character/");
        let commands = update(&mut page, Msg::Init);
        assert_eq!(commands, vec![Command::Fetch(ApiCall::Generate)]);

        update(&mut page, Msg::Generated(Ok(agent())));
        assert_eq!(page.character, Some(agent()));
        assert!(!page.already_saved());
        assert_saved_matches_id(&page);
    }

    #[test]
    fn init_with_tail_but_no_id_reports_without_fetching() {
        let mut page = page_at("/character/not-an-id");
        let commands = update(&mut page, Msg::Init);
        assert!(commands.is_empty());
        assert_eq!(page.load_error.as_deref(), Some(MISSING_ID));
        assert_eq!(page.phase(), Phase::Error(MISSING_ID));
    }

    #[test]
    fn path_load_failure_uses_server_message_or_fallback() {
        let mut page = page_at(&format!("/character/{ID}"));
        update(&mut page, Msg::Init);
        update(
            &mut page,
            Msg::Loaded {
                id: id(),
                source: LoadSource::Path,
                result: Err(server_error("Character not found")),
            },
        );
        assert_eq!(page.load_error.as_deref(), Some("Character not found"));
        assert!(!page.already_saved());

        update(
            &mut page,
            Msg::Loaded {
                id: id(),
                source: LoadSource::Path,
                result: Err(ApiError::Network("offline".to_string())),
            },
        );
        assert_eq!(page.load_error.as_deref(), Some(LOAD_FALLBACK));
    }

    #[test]
    fn new_character_forgets_the_saved_id() {
        let mut page = loaded_page();
        update(&mut page, Msg::Save);
        update(&mut page, Msg::Saved(Ok(CharacterId::from_server("X"))));
        assert!(page.already_saved());

        let commands = update(&mut page, Msg::NewCharacter);
        assert_eq!(commands, vec![Command::Fetch(ApiCall::Generate)]);
        assert!(!page.already_saved());
        assert_saved_matches_id(&page);
    }

    #[test]
    fn load_dialog_rejects_ids_of_the_wrong_length() {
        for raw in ["", "a", "abcdefghijklmnopqrstuvw", "abcdefghijklmnopqrstuvwxyz"] {
            let mut page = loaded_page();
            update(&mut page, Msg::LoadModalOpen);
            update(&mut page, Msg::UpdateInput(raw.to_string()));
            let commands = update(&mut page, Msg::LoadCharacter);
            assert!(!has_fetch(&commands), "fetched for {raw:?}");
            assert_eq!(page.dialog_error(), Some(INVALID_ID));
        }
    }

    #[test]
    fn load_dialog_loads_and_closes_itself() {
        let mut page = loaded_page();
        update(&mut page, Msg::LoadModalOpen);
        assert_eq!(page.phase(), Phase::LoadDialogOpen);
        update(&mut page, Msg::UpdateInput(ID.to_string()));

        let commands = update(&mut page, Msg::LoadCharacter);
        assert_eq!(
            commands,
            vec![Command::Fetch(ApiCall::Load {
                id: id(),
                source: LoadSource::Dialog
            })]
        );

        let other = Character::new(json!({ "Class": "Criminal" }));
        let commands = update(
            &mut page,
            Msg::Loaded {
                id: id(),
                source: LoadSource::Dialog,
                result: Ok(other.clone()),
            },
        );
        assert_eq!(
            commands,
            vec![Command::After {
                delay_ms: 1_000,
                msg: Msg::CloseModal
            }]
        );
        assert_eq!(page.character, Some(other));
        assert_eq!(page.id(), Some(&id()));
        assert_eq!(
            page.saved.as_ref().unwrap().share_url,
            format!("{ORIGIN}/character/{ID}")
        );
        assert_saved_matches_id(&page);
    }

    #[test]
    fn load_dialog_failure_is_shown_in_the_dialog() {
        let mut page = loaded_page();
        update(&mut page, Msg::LoadModalOpen);
        update(
            &mut page,
            Msg::Loaded {
                id: id(),
                source: LoadSource::Dialog,
                result: Err(ApiError::Server {
                    status: 500,
                    message: None,
                }),
            },
        );
        assert_eq!(page.dialog_error(), Some(LOAD_FALLBACK));
        assert_eq!(page.load_error, None);
        assert!(!page.already_saved());
    }

    #[test]
    fn load_modal_open_replaces_the_save_dialog() {
        let mut page = loaded_page();
        update(&mut page, Msg::Save);
        update(&mut page, Msg::Saved(Err(server_error("boom"))));
        assert_eq!(page.dialog_error(), Some("boom"));

        update(&mut page, Msg::LoadModalOpen);
        assert_eq!(page.dialog, Dialog::Load { error: None });
    }

    #[test]
    fn load_dialog_remembers_the_typed_id() {
        let mut page = loaded_page();
        update(&mut page, Msg::LoadModalOpen);
        update(&mut page, Msg::UpdateInput("short".to_string()));
        update(&mut page, Msg::LoadCharacter);
        assert_eq!(page.dialog_error(), Some(INVALID_ID));

        update(&mut page, Msg::LoadModalOpen);
        assert_eq!(page.load_input, "short");
        assert_eq!(page.dialog_error(), None);

        update(&mut page, Msg::Save);
        update(&mut page, Msg::LoadModalOpen);
        assert_eq!(page.load_input, "short");

        update(&mut page, Msg::UpdateInput(ID.to_string()));
        let commands = update(&mut page, Msg::LoadCharacter);
        assert!(has_fetch(&commands));
    }

    #[test]
    fn typing_without_the_load_dialog_is_ignored() {
        let mut page = loaded_page();
        update(&mut page, Msg::UpdateInput(ID.to_string()));
        assert_eq!(page.load_input, "");
    }

    #[test]
    fn save_posts_and_builds_share_url() {
        let mut page = loaded_page();
        let commands = update(&mut page, Msg::Save);
        assert_eq!(commands, vec![Command::Fetch(ApiCall::Save(agent()))]);
        assert_eq!(page.phase(), Phase::SaveDialogOpen);

        update(&mut page, Msg::Saved(Ok(CharacterId::from_server("X"))));
        assert!(page.already_saved());
        assert_eq!(page.id().map(CharacterId::as_str), Some("X"));
        assert_eq!(
            page.saved.as_ref().unwrap().share_url,
            format!("{ORIGIN}/character/X")
        );
        assert_saved_matches_id(&page);
    }

    #[test]
    fn share_url_normalizes_missing_trailing_slash() {
        let mut page = page_at("/character");
        update(&mut page, Msg::Init);
        update(&mut page, Msg::Generated(Ok(agent())));
        update(&mut page, Msg::Save);
        update(&mut page, Msg::Saved(Ok(CharacterId::from_server("X"))));
        assert_eq!(
            page.saved.as_ref().unwrap().share_url,
            format!("{ORIGIN}/character/X")
        );
    }

    #[test]
    fn save_failure_clears_id_and_reports() {
        let mut page = loaded_page();
        update(&mut page, Msg::Save);
        update(&mut page, Msg::Saved(Err(server_error("boom"))));
        assert_eq!(page.id(), None);
        assert!(!page.already_saved());
        assert_eq!(page.dialog_error(), Some("boom"));

        update(&mut page, Msg::Save);
        update(&mut page, Msg::Saved(Err(ApiError::Network("offline".into()))));
        assert_eq!(page.dialog_error(), Some(SAVE_FALLBACK));
    }

    #[test]
    fn save_when_already_saved_does_not_post() {
        let mut page = loaded_page();
        update(&mut page, Msg::Save);
        update(&mut page, Msg::Saved(Ok(CharacterId::from_server("X"))));
        page.set_dialog_error(Some("stale".to_string()));

        let commands = update(&mut page, Msg::Save);
        assert!(!has_fetch(&commands));
        assert_eq!(page.dialog_error(), None);
        assert_eq!(page.phase(), Phase::SaveDialogOpen);
    }

    #[test]
    fn save_before_character_arrives_explains_itself() {
        let mut page = page_at("/character/");
        update(&mut page, Msg::Init);
        let commands = update(&mut page, Msg::Save);
        assert!(!has_fetch(&commands));
        assert_eq!(page.dialog_error(), Some(NOT_LOADED_YET));
        assert!(!page.already_saved());
    }

    #[test]
    fn close_modal_clears_everything() {
        let mut page = page_at("/character/bad");
        update(&mut page, Msg::Init);
        update(&mut page, Msg::LoadModalOpen);
        update(&mut page, Msg::UpdateInput("short".to_string()));
        update(&mut page, Msg::LoadCharacter);
        assert!(page.dialog_error().is_some());
        assert!(page.load_error.is_some());

        update(&mut page, Msg::CloseModal);
        assert_eq!(page.dialog, Dialog::Closed);
        assert_eq!(page.dialog_error(), None);
        assert_eq!(page.load_input, "");
        assert_eq!(page.load_error, None);

        // the auto-close after a dialog load may land on an already closed page
        update(&mut page, Msg::CloseModal);
        assert_eq!(page.dialog, Dialog::Closed);
    }

    #[test]
    fn late_failures_after_closing_are_dropped() {
        let mut page = loaded_page();
        update(&mut page, Msg::Save);
        update(&mut page, Msg::CloseModal);
        update(&mut page, Msg::Saved(Err(server_error("boom"))));
        assert_eq!(page.dialog, Dialog::Closed);
        assert_eq!(page.id(), None);
    }

    #[test]
    fn generate_failure_is_reported_on_the_page() {
        let mut page = page_at("/character/");
        update(&mut page, Msg::Init);
        update(&mut page, Msg::Generated(Err(server_error("rolled a 1"))));
        assert_eq!(page.phase(), Phase::Error("rolled a 1"));
    }

    #[test]
    fn new_character_after_generate_failure_recovers() {
        let mut page = page_at("/character/");
        update(&mut page, Msg::Init);
        update(&mut page, Msg::Generated(Err(ApiError::Network("offline".into()))));
        assert_eq!(page.phase(), Phase::Error(GENERATE_FALLBACK));

        let commands = update(&mut page, Msg::NewCharacter);
        assert_eq!(commands, vec![Command::Fetch(ApiCall::Generate)]);
        assert_eq!(page.phase(), Phase::Loading);

        update(&mut page, Msg::Generated(Ok(agent())));
        assert_eq!(page.phase(), Phase::Loaded);
    }

    #[test]
    fn new_character_on_a_bad_id_path_recovers() {
        let mut page = page_at("/character/bad");
        update(&mut page, Msg::Init);
        assert_eq!(page.phase(), Phase::Error(MISSING_ID));

        update(&mut page, Msg::NewCharacter);
        update(&mut page, Msg::Generated(Ok(agent())));
        assert_eq!(page.phase(), Phase::Loaded);
        assert_eq!(page.character, Some(agent()));
    }

    #[test]
    fn edits_change_the_local_document_only() {
        let mut page = loaded_page();
        let commands = update(
            &mut page,
            Msg::EditField {
                path: vec![
                    PathSegment::Key("Stats".to_string()),
                    PathSegment::Key("Power".to_string()),
                ],
                value: FieldValue::Number("14".to_string()),
            },
        );
        assert!(commands.is_empty());
        let doc = page.character.as_ref().unwrap().as_value();
        assert_eq!(doc["Stats"]["Power"], 14);

        update(
            &mut page,
            Msg::EditField {
                path: vec![
                    PathSegment::Key("Stats".to_string()),
                    PathSegment::Key("Power".to_string()),
                ],
                value: FieldValue::Number("fourteen".to_string()),
            },
        );
        let doc = page.character.as_ref().unwrap().as_value();
        assert_eq!(doc["Stats"]["Power"], 14);
    }
}
