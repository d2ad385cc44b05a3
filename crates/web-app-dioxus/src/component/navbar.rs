use dioxus::prelude::*;

use trh_web_app::{Event, Tab};

use crate::{VIEW_STATE, component::element::Icon, dispatch};

#[component]
pub fn Header() -> Element {
    let page_title = match VIEW_STATE.read().active_tab {
        Tab::Library => "Biblioteca de Ejercicios TRH",
        tab => tab.name(),
    };

    rsx! {
        header {
            class: "topbar",
            button {
                class: "topbar-button",
                Icon { name: "arrow-left" }
            }
            h1 {
                class: "topbar-title",
                "{page_title}"
            }
            button {
                class: "topbar-button",
                Icon { name: "circle-info" }
            }
        }
    }
}

#[component]
pub fn TabBar() -> Element {
    rsx! {
        nav {
            class: "tabbar",
            for tab in Tab::iter() {
                TabItem { tab: *tab }
            }
        }
    }
}

#[component]
fn TabItem(tab: Tab) -> Element {
    let active = VIEW_STATE.read().active_tab == tab;

    rsx! {
        button {
            class: "tabbar-item",
            class: if active { "is-active" },
            onclick: move |_| dispatch(Event::TabSelected(tab)),
            Icon { name: icon(tab) }
            span {
                class: "tabbar-label",
                {tab.name()}
            }
        }
    }
}

fn icon(tab: Tab) -> String {
    match tab {
        Tab::Home => "house",
        Tab::Library => "book-open",
        Tab::Exercises => "stopwatch",
        Tab::Profile => "user",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_is_distinct() {
        let mut icons = vec![];

        for tab in Tab::iter() {
            let name = icon(*tab);

            assert!(!name.is_empty());
            assert!(!icons.contains(&name));

            icons.push(name);
        }
    }
}
