use crate::domain::extraction::api;
use crate::routes::navigator::{use_navigator, NavigationRequest};
use crate::routes::route_labels::detail_page_title;
use crate::routes::routes;
use crate::shared::date_utils::format_datetime;
use contracts::domain::extraction::ExtractionResponse;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn ExtractionDetails(id: String) -> impl IntoView {
    let navigator = use_navigator();

    let (extraction, set_extraction) = signal::<Option<ExtractionResponse>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let id_for_effect = id.clone();
    Effect::new(move || {
        let id = id_for_effect.clone();
        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::get_extraction(&id).await {
                Ok(data) => {
                    log!(
                        "Loaded extraction '{}' with {} sentences",
                        data.extraction_id,
                        data.sentences.as_ref().map(Vec::len).unwrap_or(0)
                    );
                    set_extraction.set(Some(data));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page">
            {move || {
                if loading.get() {
                    view! { <div class="placeholder">"Loading..."</div> }.into_any()
                } else if let Some(err) = error.get() {
                    view! { <div class="alert alert--error">{err}</div> }.into_any()
                } else if let Some(extraction) = extraction.get() {
                    let heading = detail_page_title(
                        "Extraction",
                        extraction.display_identifier(),
                    );
                    let created = extraction
                        .creation_time
                        .as_deref()
                        .map(format_datetime)
                        .unwrap_or_default();
                    let status = extraction.status.clone();
                    let text = extraction.text.clone();
                    let sentences = extraction.sentences.clone().unwrap_or_default();
                    let entities = extraction.entities.clone().unwrap_or_default();

                    view! {
                        <div>
                            <div class="page__header">
                                <div class="page__header-left">
                                    <h1 class="page__title">{heading}</h1>
                                    <span class="badge badge--neutral">{status}</span>
                                </div>
                                <div class="page__header-right">
                                    <span class="page__meta">{created}</span>
                                </div>
                            </div>

                            <section class="detail-section">
                                <h2>"Text"</h2>
                                <p class="detail-section__text">{text}</p>
                            </section>

                            <section class="detail-section">
                                <h2>{format!("Sentences ({})", sentences.len())}</h2>
                                <ul class="link-list">
                                    {sentences
                                        .into_iter()
                                        .map(|sentence| {
                                            let hlc_id = sentence.hlc_id.clone();
                                            view! {
                                                <li>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            navigator.push(NavigationRequest::with_id(
                                                                routes::HLC_DETAIL,
                                                                hlc_id.clone(),
                                                            ));
                                                        }
                                                    >
                                                        {sentence.text.clone()}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>

                            <section class="detail-section">
                                <h2>{format!("Entities ({})", entities.len())}</h2>
                                <ul class="link-list">
                                    {entities
                                        .into_iter()
                                        .map(|entity| {
                                            let entity_id = entity.id.clone();
                                            let label = entity
                                                .textual_identifier
                                                .clone()
                                                .or(entity.text.clone())
                                                .unwrap_or_else(|| entity.id.clone());
                                            view! {
                                                <li>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            navigator.push(NavigationRequest::with_id(
                                                                routes::ENTITY_DETAIL,
                                                                entity_id.clone(),
                                                            ));
                                                        }
                                                    >
                                                        {label}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div class="placeholder">"Extraction not found"</div> }.into_any()
                }
            }}
        </div>
    }
}
