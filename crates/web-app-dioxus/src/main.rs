#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use dioxus::prelude::*;
use log::{debug, error};

use trh_web_app as web_app;
use web_app::{Event, Tab, ViewState};

use component::navbar::{Header, TabBar};
use page::{
    exercises::Exercises, home::Home, library::Library, profile::Profile, register::Register,
};

mod component;
mod page;

const MAIN_CSS: Asset = asset!("/assets/main.css");

static VIEW_STATE: GlobalSignal<ViewState> = Signal::global(ViewState::default);

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init();
}

fn dispatch(event: Event) {
    debug!("handling event: {event:?}");
    let state = VIEW_STATE.read().clone();
    *VIEW_STATE.write() = state.handle(event);
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
        {
            element.set_inner_html(&format!(
                "
                <div class=\"message is-danger\">
                    <div class=\"message-header\">
                        <p>Algo salió mal</p>
                    </div>
                    <div class=\"message-body\">
                        <div class=\"block\">
                            Ocurrió un error inesperado y la aplicación no puede continuar.
                        </div>
                        <div class=\"block\">
                            <pre>{info}</pre>
                        </div>
                        <div class=\"block\">
                            <button class=\"button\" onclick=\"location.reload()\">
                                Recargar página
                            </button>
                        </div>
                    </div>
                </div>
                "
            ));
        }
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        if VIEW_STATE.read().is_registered() {
            div {
                class: "app",
                Header {}
                main {
                    class: "app-content",
                    Content {}
                }
                TabBar {}
            }
        } else {
            Register {}
        }
    }
}

#[component]
fn Content() -> Element {
    match VIEW_STATE.read().active_tab {
        Tab::Home => rsx! { Home {} },
        Tab::Library => rsx! { Library {} },
        Tab::Exercises => rsx! { Exercises {} },
        Tab::Profile => rsx! { Profile {} },
    }
}
