use dioxus::prelude::*;

use trh_domain as domain;
use trh_web_app::Event;

use crate::{
    component::{
        element::{Avatar, Color},
        form::{FieldValue, FieldValueState, InputField},
    },
    dispatch,
};

#[component]
pub fn Register() -> Element {
    let name = use_signal(FieldValue::<String>::default);
    let height = use_signal(FieldValue::<String>::default);
    let weight = use_signal(FieldValue::<String>::default);
    let age = use_signal(FieldValue::<String>::default);

    let all_valid = name.read().valid()
        && height.read().valid()
        && weight.read().valid()
        && age.read().valid();

    rsx! {
        div {
            class: "register",
            div {
                class: "block has-text-centered",
                Avatar { icon: "user", color: Color::Primary }
                h1 {
                    class: "title is-3",
                    "Bienvenido a TRH"
                }
                p {
                    class: "has-text-grey",
                    "Crea tu perfil para personalizar tu experiencia de entrenamiento."
                }
            }
            form {
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    dispatch(Event::RegistrationSubmitted {
                        name: name.read().input.clone(),
                        height: height.read().input.clone(),
                        weight: weight.read().input.clone(),
                        age: age.read().input.clone(),
                    });
                },
                InputField {
                    label: "Nombre Completo".to_string(),
                    placeholder: "Ej. Ana García".to_string(),
                    value: name.read().input.clone(),
                    error: if let Err(err) = &name.read().validated { err.clone() },
                    has_changed: name.read().changed(),
                    oninput: move |event: FormEvent| {
                        update_field(name, domain::ProfileField::Name, &event.value());
                    },
                }
                div {
                    class: "field-row",
                    InputField {
                        label: "Talla (cm)".to_string(),
                        r#type: "number".to_string(),
                        inputmode: "numeric".to_string(),
                        placeholder: "170".to_string(),
                        value: height.read().input.clone(),
                        error: if let Err(err) = &height.read().validated { err.clone() },
                        has_changed: height.read().changed(),
                        oninput: move |event: FormEvent| {
                            update_field(height, domain::ProfileField::Height, &event.value());
                        },
                    }
                    InputField {
                        label: "Peso (kg)".to_string(),
                        r#type: "number".to_string(),
                        inputmode: "numeric".to_string(),
                        placeholder: "65".to_string(),
                        value: weight.read().input.clone(),
                        error: if let Err(err) = &weight.read().validated { err.clone() },
                        has_changed: weight.read().changed(),
                        oninput: move |event: FormEvent| {
                            update_field(weight, domain::ProfileField::Weight, &event.value());
                        },
                    }
                    InputField {
                        label: "Edad".to_string(),
                        r#type: "number".to_string(),
                        inputmode: "numeric".to_string(),
                        placeholder: "28".to_string(),
                        value: age.read().input.clone(),
                        error: if let Err(err) = &age.read().validated { err.clone() },
                        has_changed: age.read().changed(),
                        oninput: move |event: FormEvent| {
                            update_field(age, domain::ProfileField::Age, &event.value());
                        },
                    }
                }
                button {
                    class: "button is-primary is-fullwidth",
                    r#type: "submit",
                    disabled: !all_valid,
                    "Comenzar ahora"
                }
            }
        }
    }
}

fn update_field(
    mut field: Signal<FieldValue<String>>,
    profile_field: domain::ProfileField,
    value: &str,
) {
    let mut field = field.write();
    field.input = value.to_string();
    field.validated = profile_field
        .validate(&field.input)
        .map_err(|err| err.to_string());
}
