use crate::routes::navigator::{use_navigator, NavigationRequest};
use crate::routes::route_labels::page_title_for_route;
use crate::routes::routes;
use leptos::prelude::*;

/// Shortcut cards shown on the landing page: route name plus a one-line
/// description.
const SHORTCUTS: &[(&str, &str)] = &[
    (
        routes::EXTRACTION_LIST,
        "Ingest texts and browse their sentence and concept graphs",
    ),
    (routes::SOURCE, "Where the ingested texts came from"),
    (
        routes::SEARCH,
        "Find extractions, concepts and entities by text",
    ),
    (
        routes::WORKSPACE,
        "Important concepts, recent records and repeated phrases",
    ),
    (
        routes::COMPARE,
        "Phrases shared between two extractions",
    ),
];

#[component]
pub fn HomeView() -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"MSCT"</h1>
                </div>
            </div>
            <p class="page__intro">
                "Multi-level semantic concept tool: texts are split into \
                 sentences (high-level concepts) and tokens (medium-level \
                 concepts), and curated into entities in a knowledge graph."
            </p>

            <div class="card-grid">
                {SHORTCUTS
                    .iter()
                    .map(|&(name, description)| {
                        view! {
                            <button
                                class="card"
                                on:click=move |_| navigator.push(NavigationRequest::to(name))
                            >
                                <h2 class="card__title">{page_title_for_route(name)}</h2>
                                <p class="card__description">{description}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
