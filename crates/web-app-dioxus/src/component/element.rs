use dioxus::prelude::*;
use strum::Display;

use trh_domain as domain;

#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "danger")]
    Danger,
}

#[must_use]
pub fn difficulty_color(difficulty: domain::Difficulty) -> Color {
    match difficulty {
        domain::Difficulty::Beginner => Color::Success,
        domain::Difficulty::Intermediate => Color::Warning,
        domain::Difficulty::Advanced => Color::Danger,
    }
}

#[component]
pub fn Icon(name: String, is_large: Option<bool>) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_large.unwrap_or_default() { "is-large" },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn Avatar(icon: String, color: Color) -> Element {
    rsx! {
        div {
            class: "avatar has-background-{color}",
            Icon { name: icon, is_large: true }
        }
    }
}

#[component]
pub fn Title(title: String) -> Element {
    rsx! {
        div {
            class: "block has-text-centered",
            h1 {
                class: "title is-5",
                "{title}"
            }
        }
    }
}

#[component]
pub fn DataBox(children: Element, title: String) -> Element {
    rsx! {
        div {
            class: "box has-text-centered p-3",
            p {
                class: "is-size-7 is-uppercase has-text-grey",
                {title}
            }
            p {
                class: "is-size-5",
                {children}
            }
        }
    }
}

#[component]
pub fn Tag(text: String, color: Option<Color>) -> Element {
    rsx! {
        span {
            class: "tag",
            class: if let Some(color) = color { "is-{color}" },
            {text}
        }
    }
}

#[component]
pub fn SearchBox(
    search_term: String,
    placeholder: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "control has-icons-left is-flex-grow-1",
            span {
                class: "icon is-left",
                i { class: "fas fa-search" }
            }
            input {
                class: "input",
                r#type: "text",
                placeholder,
                value: search_term,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
