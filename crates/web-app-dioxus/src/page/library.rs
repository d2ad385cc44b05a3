use dioxus::prelude::*;

use trh_domain as domain;
use trh_web_app::Event;

use crate::{
    VIEW_STATE,
    component::element::{Avatar, Color, Icon, SearchBox, Tag, difficulty_color},
    dispatch,
};

#[component]
pub fn Library() -> Element {
    let (query, active_category, exercises) = {
        let state = VIEW_STATE.read();
        (
            state.search_query.clone(),
            state.active_category,
            state.filter().exercises(),
        )
    };

    rsx! {
        div {
            class: "block",
            SearchBox {
                search_term: query.clone(),
                placeholder: "Buscar posturas (ej. Venus)".to_string(),
                oninput: move |event: FormEvent| dispatch(Event::SearchChanged(event.value())),
            }
        }
        {view_categories(active_category)}
        {view_heading(&query, exercises.len())}
        if exercises.is_empty() {
            {view_no_results(&query)}
        } else {
            for exercise in exercises {
                {view_card(exercise)}
            }
        }
    }
}

fn view_categories(active: Option<domain::Category>) -> Element {
    let chips = std::iter::once((None, "Todas las posturas"))
        .chain(domain::Category::iter().map(|c| (Some(*c), c.name())))
        .map(|(category, name)| {
            rsx! {
                button {
                    class: "chip",
                    class: if active == category { "is-active" },
                    onclick: move |_| dispatch(Event::CategorySelected(category)),
                    {name}
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "chips",
            for chip in chips {
                {chip}
            }
        }
    }
}

fn view_heading(query: &str, count: usize) -> Element {
    let result_count = format!(
        "{count} {}",
        if count == 1 { "resultado" } else { "resultados" }
    );

    rsx! {
        div {
            class: "list-heading",
            h2 {
                class: "title is-5",
                if query.is_empty() {
                    "Posturas recomendadas"
                } else {
                    "Resultados de búsqueda"
                }
            }
            if !query.is_empty() {
                span {
                    class: "is-size-7 has-text-grey",
                    {result_count}
                }
            }
        }
    }
}

fn view_card(exercise: &'static domain::Exercise) -> Element {
    let color = difficulty_color(exercise.difficulty);

    rsx! {
        div {
            class: "card",
            figure {
                class: "card-image",
                img {
                    src: exercise.image_url,
                    alt: exercise.name,
                    referrerpolicy: "no-referrer",
                }
                span {
                    class: "card-difficulty tag is-{color}",
                    {exercise.difficulty.name()}
                }
            }
            div {
                class: "card-content",
                div {
                    class: "is-flex is-justify-content-space-between",
                    h3 {
                        class: "title is-5",
                        {exercise.name}
                    }
                    span {
                        class: if exercise.bookmarked { "has-text-link" } else { "has-text-grey" },
                        Icon { name: "bookmark" }
                    }
                }
                p {
                    class: "has-text-grey",
                    {exercise.description}
                }
                div {
                    class: "tags",
                    if exercise.bookmarked {
                        Tag { text: "Favorito".to_string(), color: Color::Warning }
                    }
                    for tag in exercise.tags {
                        Tag { text: tag.to_string() }
                    }
                    Tag { text: exercise.duration.to_string() }
                }
            }
        }
    }
}

fn view_no_results(query: &str) -> Element {
    rsx! {
        div {
            class: "block has-text-centered no-results",
            Avatar { icon: "search", color: Color::Primary }
            h3 {
                class: "title is-5",
                "No se encontraron resultados"
            }
            p {
                class: "has-text-grey",
                "No pudimos encontrar nada que coincida con \"{query}\". Intenta con otros términos."
            }
            button {
                class: "button is-text",
                onclick: move |_| dispatch(Event::SearchCleared),
                "Limpiar búsqueda"
            }
        }
    }
}
