use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::character::{CharacterPage, Msg};
use crate::components::modal::Modal;

use super::error_line;

pub fn load_dialog(input: &str, error: Option<&str>, link: &Scope<CharacterPage>) -> Html {
    html! {
        <Modal title="Load character" on_close={link.callback(|()| Msg::CloseModal)}>
            <label for="load-character-id">{ "Character ID" }</label>
            <input
                id="load-character-id"
                type="text"
                autocomplete="off"
                spellcheck="false"
                placeholder="24 character ID"
                value={input.to_string()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateInput(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    (e.key() == "Enter").then_some(Msg::LoadCharacter)
                })}
            />
            <button class="primary" onclick={link.callback(|_| Msg::LoadCharacter)}>
                { "Load" }
            </button>
            { error_line(error) }
        </Modal>
    }
}
