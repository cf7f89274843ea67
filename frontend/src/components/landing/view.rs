use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::modal::Modal;

use super::messages::Msg;
use super::state::{LandingDialog, LandingPage};

pub fn view(page: &LandingPage, ctx: &Context<LandingPage>) -> Html {
    let link = ctx.link();

    html! {
        <main class="landing-root">
            <h1 class="title">{ page.title }</h1>
            <div class="actions">
                <a class="button primary" href={page.page.new_character_path()}>{ "Generate a character" }</a>
                <button onclick={link.callback(|_| Msg::OpenModal)}>{ "Load a character" }</button>
            </div>
            {
                match &page.dialog {
                    Some(dialog) => load_dialog(dialog, link),
                    None => html! {},
                }
            }
        </main>
    }
}

fn load_dialog(dialog: &LandingDialog, link: &Scope<LandingPage>) -> Html {
    html! {
        <Modal title="Load character" on_close={link.callback(|()| Msg::CloseModal)}>
            <label for="landing-character-id">{ "Character ID" }</label>
            <input
                id="landing-character-id"
                type="text"
                autocomplete="off"
                spellcheck="false"
                value={dialog.input.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateInput(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    (e.key() == "Enter").then_some(Msg::GoToCharacter)
                })}
            />
            <button class="primary" onclick={link.callback(|_| Msg::GoToCharacter)}>
                { "Go" }
            </button>
            {
                if dialog.invalid_id {
                    html! { <p class="dialog-error" role="alert">{ "Invalid ID" }</p> }
                } else {
                    html! {}
                }
            }
        </Modal>
    }
}
