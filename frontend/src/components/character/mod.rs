//! Character page: shows a generated or saved character and lets the user
//! start over, load another character by id, edit fields and save.
//!
//! The page follows the same split as the rest of the frontend: `state` holds
//! the data, `update` turns messages into state changes plus [`Command`]s, and
//! `view` renders. This module runs the commands: API calls and delayed
//! messages are spawned on the browser event loop and report back as messages.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::api::CharactersApi;

use messages::{ApiCall, Command};
pub use messages::Msg;
pub use props::CharacterPageProps;
pub use state::CharacterPage;

impl Component for CharacterPage {
    type Message = Msg;
    type Properties = CharacterPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        CharacterPage::new(ctx.props().page.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let commands = update::update(self, msg);
        run_commands(ctx, commands);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.initialized {
            self.initialized = true;
            ctx.link().send_message(Msg::Init);
        }
    }
}

fn run_commands(ctx: &Context<CharacterPage>, commands: Vec<Command>) {
    for command in commands {
        let link = ctx.link().clone();
        match command {
            Command::Fetch(call) => {
                let api = CharactersApi::new(ctx.props().api.clone());
                spawn_local(async move {
                    let msg = match call {
                        ApiCall::Generate => Msg::Generated(api.generate().await),
                        ApiCall::Load { id, source } => {
                            let result = api.load(&id).await;
                            Msg::Loaded { id, source, result }
                        }
                        ApiCall::Save(character) => Msg::Saved(api.save(&character).await),
                    };
                    link.send_message(msg);
                });
            }
            Command::After { delay_ms, msg } => {
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    link.send_message(msg);
                });
            }
        }
    }
}
