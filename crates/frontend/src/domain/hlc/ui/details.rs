use std::collections::HashSet;

use crate::domain::entity::api as entity_api;
use crate::domain::hlc::api;
use crate::routes::navigator::{use_navigator, NavigationRequest};
use crate::routes::route_labels::detail_page_title;
use crate::routes::routes;
use crate::shared::date_utils::{format_datetime, preview};
use contracts::domain::entity::EntityCreate;
use contracts::domain::hlc::HlcDetail;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Detail view of one sentence node: its ordered token chain, entity
/// recommendations and parents. Chain items dispatch by their node label;
/// selected MLC tokens can be merged into a new entity.
#[component]
pub fn HlcDetails(id: String) -> impl IntoView {
    let navigator = use_navigator();

    let (hlc, set_hlc) = signal::<Option<HlcDetail>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Entity-from-tokens form state
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let (new_identifier, set_new_identifier) = signal(String::new());
    let (creating, set_creating) = signal(false);
    let (create_error, set_create_error) = signal::<Option<String>>(None);

    let id_for_effect = id.clone();
    Effect::new(move || {
        let id = id_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::get_hlc(&id).await {
                Ok(data) => {
                    log!("Loaded HLC '{}' with {} chain items", data.id, data.chain.len());
                    set_hlc.set(Some(data));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let toggle_token = move |token_id: String, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(token_id);
            } else {
                s.remove(&token_id);
            }
        });
    };

    let on_create_entity = move |_| {
        let Some(data) = hlc.get_untracked() else {
            return;
        };
        let chosen = selected.get_untracked();
        if chosen.is_empty() {
            set_create_error.set(Some("Select at least one token".to_string()));
            return;
        }

        // Keep chain order for both the merged text and the anchor index.
        let mut token_ids = Vec::new();
        let mut token_texts = Vec::new();
        let mut first_index = None;
        for (index, item) in data.chain.iter().enumerate() {
            let Some(item_id) = item.id.as_ref() else {
                continue;
            };
            if chosen.contains(item_id) {
                token_ids.push(item_id.clone());
                token_texts.push(item.text.clone().unwrap_or_default());
                if first_index.is_none() {
                    first_index = Some(index as i64);
                }
            }
        }

        let text = token_texts.join(" ");
        let identifier = new_identifier.get_untracked();
        let identifier = if identifier.is_empty() {
            text.clone()
        } else {
            identifier
        };

        let payload = EntityCreate {
            text,
            textual_identifier: identifier,
            id: None,
            creation_time: None,
            from_hlc: Some(true),
            hlc_id: Some(data.id.clone()),
            mlc_token_ids: Some(token_ids),
            mlc_token_index: first_index,
        };

        set_creating.set(true);
        set_create_error.set(None);
        spawn_local(async move {
            match entity_api::create_entity(&payload).await {
                Ok(created) => {
                    set_creating.set(false);
                    navigator.push(NavigationRequest::with_id(routes::ENTITY_DETAIL, created.id));
                }
                Err(e) => {
                    set_create_error.set(Some(e));
                    set_creating.set(false);
                }
            }
        });
    };

    view! {
        <div class="page">
            {move || {
                if loading.get() {
                    view! { <div class="placeholder">"Loading..."</div> }.into_any()
                } else if let Some(err) = error.get() {
                    view! { <div class="alert alert--error">{err}</div> }.into_any()
                } else if let Some(data) = hlc.get() {
                    let heading = detail_page_title("High Level Concept", &preview(&data.text, 60));
                    let created = data
                        .creation_time
                        .as_deref()
                        .map(format_datetime)
                        .unwrap_or_default();
                    let text = data.text.clone();
                    let chain: Vec<_> = data
                        .chain
                        .iter()
                        .filter(|item| !item.is_empty())
                        .cloned()
                        .collect();
                    let recommended = data.recommended_entities.clone();
                    let entities = data.entities.clone();
                    let extractions = data.extractions.clone();

                    view! {
                        <div>
                            <div class="page__header">
                                <div class="page__header-left">
                                    <h1 class="page__title">{heading}</h1>
                                </div>
                                <div class="page__header-right">
                                    <span class="page__meta">{created}</span>
                                </div>
                            </div>

                            <section class="detail-section">
                                <h2>"Sentence"</h2>
                                <p class="detail-section__text">{text}</p>
                            </section>

                            <section class="detail-section">
                                <h2>{format!("Chain ({})", chain.len())}</h2>
                                <div class="chain">
                                    {chain
                                        .into_iter()
                                        .map(|item| {
                                            let item_id = item.id.clone().unwrap_or_default();
                                            let kind = item.kind.clone().unwrap_or_default();
                                            let label = item.text.clone().unwrap_or_else(|| item_id.clone());
                                            let is_mlc = kind == "MLC";
                                            let id_for_click = item_id.clone();
                                            let kind_for_click = kind.clone();
                                            let badge_class = if is_mlc {
                                                "chain__item chain__item--mlc"
                                            } else {
                                                "chain__item chain__item--entity"
                                            };
                                            view! {
                                                <span class=badge_class>
                                                    {is_mlc.then(|| {
                                                        let id_for_checked = item_id.clone();
                                                        let id_for_change = item_id.clone();
                                                        view! {
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || {
                                                                    selected.with(|s| s.contains(&id_for_checked))
                                                                }
                                                                on:change=move |ev| toggle_token(
                                                                    id_for_change.clone(),
                                                                    event_target_checked(&ev),
                                                                )
                                                            />
                                                        }
                                                    })}
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            navigator.redirect_to_view(&id_for_click, &kind_for_click);
                                                        }
                                                    >
                                                        {label}
                                                    </a>
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>

                            <section class="detail-section">
                                <h2>"New entity from selected tokens"</h2>
                                <div class="form-group form-group--inline">
                                    <input
                                        type="text"
                                        placeholder="Textual identifier (defaults to merged text)"
                                        prop:value=move || new_identifier.get()
                                        on:input=move |ev| set_new_identifier.set(event_target_value(&ev))
                                        disabled=move || creating.get()
                                    />
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=on_create_entity
                                        disabled=Signal::derive(move || {
                                            creating.get() || selected.with(|s| s.is_empty())
                                        })
                                    >
                                        {move || {
                                            if creating.get() {
                                                "Creating...".to_string()
                                            } else {
                                                format!("Create entity ({})", selected.with(|s| s.len()))
                                            }
                                        }}
                                    </Button>
                                </div>
                                {move || {
                                    create_error.get().map(|err| view! {
                                        <div class="alert alert--error">{err}</div>
                                    })
                                }}
                            </section>

                            <section class="detail-section">
                                <h2>{format!("Recommended entities ({})", recommended.len())}</h2>
                                <ul class="link-list">
                                    {recommended
                                        .into_iter()
                                        .map(|rec| {
                                            let origin = rec.recommended_by.clone().unwrap_or_default();
                                            let label = rec.label.clone().unwrap_or_default();
                                            view! {
                                                <li>
                                                    <span>{rec.text.clone()}</span>
                                                    <span class="badge badge--neutral">{label}</span>
                                                    <span class="badge badge--muted">{origin}</span>
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

                            <section class="detail-section">
                                <h2>"Extractions"</h2>
                                <ul class="link-list">
                                    {extractions
                                        .into_iter()
                                        .filter_map(|extraction| {
                                            let extraction_id = extraction.id.clone()?;
                                            let label = extraction
                                                .textual_identifier
                                                .clone()
                                                .unwrap_or_else(|| extraction_id.clone());
                                            Some(view! {
                                                <li>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            navigator.push(NavigationRequest::with_id(
                                                                routes::EXTRACTION_DETAIL,
                                                                extraction_id.clone(),
                                                            ));
                                                        }
                                                    >
                                                        {label}
                                                    </a>
                                                </li>
                                            })
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div class="placeholder">"High-level concept not found"</div> }.into_any()
                }
            }}
        </div>
    }
}
