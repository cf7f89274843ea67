use yew::{html, Component, Context, Html};

use crate::components::character::CharacterPage;
use crate::components::landing::LandingPage;
use crate::config::{ApiConfig, PageConfig};
use crate::console;
use crate::route::{self, Page};

/// Root component: captures the browser location once and picks the page.
pub struct App {
    page: PageConfig,
    api: ApiConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let page = PageConfig::from_window().unwrap_or_else(|| {
            console::error("could not read the page location; assuming the site root");
            PageConfig::default()
        });
        Self {
            page,
            api: ApiConfig::from_build_env(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match route::page_for(&self.page.path) {
            Page::Landing => html! { <LandingPage page={self.page.clone()} /> },
            Page::Character => html! {
                <CharacterPage page={self.page.clone()} api={self.api.clone()} />
            },
        }
    }
}
