use uuid::Uuid;
use yew::prelude::*;

/// Overlay dialog shared by the landing and character pages.
///
/// The parent decides whether the modal exists at all: it is rendered only
/// while its dialog is open, so there is no hidden DOM to keep in sync.
pub struct Modal {
    pub title_id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_backdrop = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let on_close_button = on_backdrop.clone();
        let on_keydown = {
            let on_close = props.on_close.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    on_close.emit(());
                }
            })
        };

        html! {
            <div class="modal-backdrop" onclick={on_backdrop} onkeydown={on_keydown}>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={self.title_id.clone()}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <header class="modal-header">
                        <h2 id={self.title_id.clone()}>{ props.title.clone() }</h2>
                        <button class="modal-close" title="Close" onclick={on_close_button}>
                            { "✕" }
                        </button>
                    </header>
                    <div class="modal-body">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}
