use dioxus::prelude::*;

use crate::component::element::{Avatar, Color};

#[component]
pub fn Exercises() -> Element {
    rsx! {
        div {
            class: "block has-text-centered",
            Avatar { icon: "stopwatch", color: Color::Warning }
            h2 {
                class: "title is-4",
                "Tus Rutinas"
            }
            p {
                class: "has-text-grey",
                "Aquí aparecerán tus rutinas personalizadas y entrenamientos activos."
            }
            button {
                class: "button is-primary is-fullwidth",
                "Empezar nueva rutina"
            }
        }
    }
}
