//! View rendering for the character page.
//!
//! The character document is rendered generically: objects become labelled
//! rows, arrays become lists and scalar leaves become inputs wired to
//! `Msg::EditField`. Nothing here knows which fields a character has.

use serde_json::Value;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs;
use super::helpers::{label_for, FieldPath, FieldValue, PathSegment};
use super::messages::Msg;
use super::state::{CharacterPage, Phase};

pub fn view(page: &CharacterPage, ctx: &Context<CharacterPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class={classes!("character-root", phase_class(page.phase()))}>
            { build_toolbar(page, link) }
            { build_status(page) }
            {
                match &page.character {
                    Some(character) => html! {
                        <div class="sheet">
                            { render_node(character.as_value(), Vec::new(), link) }
                        </div>
                    },
                    None => html! {},
                }
            }
            { dialogs::dialog(page, link) }
        </div>
    }
}

fn phase_class(phase: Phase<'_>) -> &'static str {
    match phase {
        Phase::Loading => "is-loading",
        Phase::Loaded => "is-loaded",
        Phase::LoadDialogOpen | Phase::SaveDialogOpen => "has-dialog",
        Phase::Error(_) => "has-error",
    }
}

fn build_toolbar(page: &CharacterPage, link: &Scope<CharacterPage>) -> Html {
    let save_label = if page.already_saved() { "Share" } else { "Save" };

    html! {
        <nav class="toolbar">
            <a class="home" href={page.page.home_path()}>{ "Home" }</a>
            <button onclick={link.callback(|_| Msg::NewCharacter)}>{ "New character" }</button>
            <button onclick={link.callback(|_| Msg::LoadModalOpen)}>{ "Load" }</button>
            <button class="primary" onclick={link.callback(|_| Msg::Save)}>{ save_label }</button>
        </nav>
    }
}

fn build_status(page: &CharacterPage) -> Html {
    if let Some(message) = &page.load_error {
        html! { <p class="load-error" role="alert">{ message.clone() }</p> }
    } else if page.character.is_none() {
        html! { <p class="loading" aria-busy="true">{ "Generating character..." }</p> }
    } else {
        html! {}
    }
}

fn child_path(path: &FieldPath, segment: PathSegment) -> FieldPath {
    let mut child = path.clone();
    child.push(segment);
    child
}

fn render_node(value: &Value, path: FieldPath, link: &Scope<CharacterPage>) -> Html {
    match value {
        Value::Object(fields) => html! {
            <dl class="sheet-object">
                {
                    for fields.iter().map(|(key, child)| {
                        let nested = child_path(&path, PathSegment::Key(key.clone()));
                        html! {
                            <div class="sheet-row">
                                <dt>{ label_for(key) }</dt>
                                <dd>{ render_node(child, nested, link) }</dd>
                            </div>
                        }
                    })
                }
            </dl>
        },
        Value::Array(items) if items.is_empty() => html! { <span class="sheet-empty">{ "none" }</span> },
        Value::Array(items) => html! {
            <ol class="sheet-list">
                {
                    for items.iter().enumerate().map(|(index, child)| {
                        let nested = child_path(&path, PathSegment::Index(index));
                        html! { <li>{ render_node(child, nested, link) }</li> }
                    })
                }
            </ol>
        },
        Value::String(text) => html! {
            <input
                type="text"
                value={text.clone()}
                oninput={link.callback(move |e: InputEvent| Msg::EditField {
                    path: path.clone(),
                    value: FieldValue::Text(e.target_unchecked_into::<HtmlInputElement>().value()),
                })}
            />
        },
        Value::Number(number) => html! {
            <input
                type="number"
                value={number.to_string()}
                onchange={link.callback(move |e: Event| Msg::EditField {
                    path: path.clone(),
                    value: FieldValue::Number(e.target_unchecked_into::<HtmlInputElement>().value()),
                })}
            />
        },
        Value::Bool(flag) => html! {
            <input
                type="checkbox"
                checked={*flag}
                onchange={link.callback(move |e: Event| Msg::EditField {
                    path: path.clone(),
                    value: FieldValue::Flag(e.target_unchecked_into::<HtmlInputElement>().checked()),
                })}
            />
        },
        Value::Null => html! { <span class="sheet-empty">{ "none" }</span> },
    }
}
