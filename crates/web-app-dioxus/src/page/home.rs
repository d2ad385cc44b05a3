use dioxus::prelude::*;

use crate::{
    VIEW_STATE,
    component::element::{Avatar, Color, DataBox},
};

#[component]
pub fn Home() -> Element {
    let first_name = VIEW_STATE
        .read()
        .profile()
        .map(|profile| profile.first_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "block has-text-centered",
            Avatar { icon: "house", color: Color::Primary }
            h2 {
                class: "title is-4",
                "Bienvenido, {first_name}"
            }
            p {
                class: "has-text-grey",
                "Tu compañero diario para ejercicios hipopresivos y bienestar postural."
            }
        }
        DataBox {
            title: "Tu progreso".to_string(),
            "3 sesiones esta semana"
        }
        DataBox {
            title: "Próximo objetivo".to_string(),
            "Completar nivel Principiante"
        }
    }
}
