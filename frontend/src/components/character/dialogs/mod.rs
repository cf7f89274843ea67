use yew::html::Scope;
use yew::prelude::*;

use super::state::{CharacterPage, Dialog};

pub mod load;
pub mod save;

/// Renders the open dialog, if any.
pub fn dialog(page: &CharacterPage, link: &Scope<CharacterPage>) -> Html {
    match &page.dialog {
        Dialog::Closed => html! {},
        Dialog::Load { error } => load::load_dialog(&page.load_input, error.as_deref(), link),
        Dialog::Save { error } => save::save_dialog(page, error.as_deref(), link),
    }
}

pub(crate) fn error_line(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <p class="dialog-error" role="alert">{ message.to_string() }</p> },
        None => html! {},
    }
}
