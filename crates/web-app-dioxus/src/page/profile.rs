use dioxus::prelude::*;

use trh_web_app::Event;

use crate::{
    VIEW_STATE,
    component::element::{Avatar, Color, DataBox, Icon},
    dispatch,
};

#[component]
pub fn Profile() -> Element {
    let Some(profile) = VIEW_STATE.read().profile().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "block is-flex profile-header",
            Avatar { icon: "user", color: Color::Primary }
            div {
                h2 {
                    class: "title is-4",
                    {profile.name.clone()}
                }
                p {
                    class: "is-size-7 has-text-grey",
                    "Miembro desde feb 2024"
                }
            }
        }
        div {
            class: "field-row",
            DataBox {
                title: "Talla".to_string(),
                "{profile.height} "
                span { class: "is-size-7 has-text-grey", "cm" }
            }
            DataBox {
                title: "Peso".to_string(),
                "{profile.weight} "
                span { class: "is-size-7 has-text-grey", "kg" }
            }
            DataBox {
                title: "Edad".to_string(),
                "{profile.age} "
                span { class: "is-size-7 has-text-grey", "años" }
            }
        }
        div {
            class: "block",
            {view_settings_row("Configuración de cuenta")}
            {view_settings_row("Notificaciones")}
        }
        button {
            class: "button is-danger is-outlined is-fullwidth",
            onclick: move |_| dispatch(Event::LoggedOut),
            "Cerrar sesión / Nuevo Usuario"
        }
    }
}

fn view_settings_row(label: &'static str) -> Element {
    rsx! {
        div {
            class: "box is-flex is-justify-content-space-between",
            span { {label} }
            Icon { name: "chevron-right" }
        }
    }
}
