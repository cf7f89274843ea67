use common::model::character::CharacterId;

#[cfg(feature = "title-glitch")]
use super::glitch::{GlitchCycle, FRAME_MS, IDLE_MS};
use super::messages::{Command, Msg};
use super::state::{LandingDialog, LandingPage};

pub fn update(page: &mut LandingPage, msg: Msg) -> Vec<Command> {
    match msg {
        Msg::Init => start_title_effect(),
        Msg::OpenModal => {
            page.dialog = Some(LandingDialog::default());
            vec![]
        }
        Msg::CloseModal => {
            page.dialog = None;
            vec![]
        }
        Msg::UpdateInput(text) => {
            if let Some(dialog) = &mut page.dialog {
                dialog.input = text;
            }
            vec![]
        }
        Msg::GoToCharacter => {
            let Some(dialog) = &mut page.dialog else {
                return vec![];
            };
            match CharacterId::parse(&dialog.input) {
                Ok(id) => vec![Command::Navigate(page.page.character_path(&id))],
                Err(_) => {
                    dialog.invalid_id = true;
                    vec![]
                }
            }
        }
        #[cfg(feature = "title-glitch")]
        Msg::Glitch => {
            page.title = page.glitch.advance();
            vec![Command::After {
                delay_ms: FRAME_MS,
                msg: Msg::RestoreTitle,
            }]
        }
        #[cfg(feature = "title-glitch")]
        Msg::RestoreTitle => {
            page.title = GlitchCycle::resting_title();
            start_title_effect()
        }
    }
}

#[cfg(feature = "title-glitch")]
fn start_title_effect() -> Vec<Command> {
    vec![Command::After {
        delay_ms: IDLE_MS,
        msg: Msg::Glitch,
    }]
}

#[cfg(not(feature = "title-glitch"))]
fn start_title_effect() -> Vec<Command> {
    vec![]
}
