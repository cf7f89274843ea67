use yew::html::Scope;
use yew::prelude::*;

use crate::components::character::{CharacterPage, Msg};
use crate::components::modal::Modal;

use super::error_line;

pub fn save_dialog(page: &CharacterPage, error: Option<&str>, link: &Scope<CharacterPage>) -> Html {
    let body = match (&page.saved, error) {
        (_, Some(_)) => error_line(error),
        (Some(saved), None) => html! {
            <>
                <p>{ "Your character is saved. Keep this link to come back to it:" }</p>
                <a class="share-link" href={saved.share_url.clone()}>{ saved.share_url.clone() }</a>
                <p class="character-id">{ format!("ID: {}", saved.id) }</p>
            </>
        },
        (None, None) => html! { <p class="pending">{ "Saving..." }</p> },
    };

    html! {
        <Modal title="Save character" on_close={link.callback(|()| Msg::CloseModal)}>
            { body }
        </Modal>
    }
}
