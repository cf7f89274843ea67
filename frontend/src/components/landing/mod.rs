//! Landing page: entry point for generating a new character or jumping to a
//! saved one by id.

use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

#[cfg(feature = "title-glitch")]
mod glitch;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::console;

use messages::Command;
pub use messages::Msg;
pub use props::LandingPageProps;
pub use state::LandingPage;

impl Component for LandingPage {
    type Message = Msg;
    type Properties = LandingPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        LandingPage::new(ctx.props().page.clone())
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

fn run_commands(ctx: &Context<LandingPage>, commands: Vec<Command>) {
    for command in commands {
        match command {
            Command::Navigate(url) => navigate(&url),
            Command::After { delay_ms, msg } => {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    link.send_message(msg);
                });
            }
        }
    }
}

fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        console::error("no window to navigate");
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        console::error(&format!("navigation to {url} failed: {err:?}"));
    }
}
