use crate::domain::mlc::api;
use crate::routes::navigator::{use_navigator, NavigationRequest};
use crate::routes::route_labels::detail_page_title;
use crate::routes::routes;
use crate::shared::date_utils::{format_datetime, preview};
use contracts::domain::mlc::MlcDetail;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Detail view of one token node: strongest `RELATED_TO` neighbors, other
/// connections, and the sentences and extractions it occurs in. Neighbor
/// rows dispatch by their node label.
#[component]
pub fn MlcDetails(id: String) -> impl IntoView {
    let navigator = use_navigator();

    let (mlc, set_mlc) = signal::<Option<MlcDetail>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let id_for_effect = id.clone();
    Effect::new(move || {
        let id = id_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::get_mlc(&id).await {
                Ok(data) => {
                    log!(
                        "Loaded MLC '{}' with {} related neighbors",
                        data.id,
                        data.relationships_with_neighbors.len()
                    );
                    set_mlc.set(Some(data));
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
                } else if let Some(data) = mlc.get() {
                    let heading = detail_page_title("Medium Level Concept", &data.text);
                    let created = data
                        .creation_time
                        .as_deref()
                        .map(format_datetime)
                        .unwrap_or_default();
                    let count = data.count;
                    let related = data.relationships_with_neighbors.clone();
                    let other = data.other_connections.clone();
                    let hlcs = data.hlcs.clone();
                    let extractions = data.extractions.clone();

                    view! {
                        <div>
                            <div class="page__header">
                                <div class="page__header-left">
                                    <h1 class="page__title">{heading}</h1>
                                    <span class="badge badge--neutral">
                                        {format!("seen {}x", count)}
                                    </span>
                                </div>
                                <div class="page__header-right">
                                    <span class="page__meta">{created}</span>
                                </div>
                            </div>

                            <section class="detail-section">
                                <h2>{format!("Related concepts ({})", related.len())}</h2>
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Neighbor"</th>
                                            <th>"Type"</th>
                                            <th>"Strength"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {related
                                            .into_iter()
                                            .filter_map(|rel| {
                                                let neighbor = rel.neighbor?;
                                                let neighbor_id = neighbor.id.clone()?;
                                                let kind = rel.neighbor_type.clone().unwrap_or_default();
                                                let kind_for_click = kind.clone();
                                                let label = neighbor
                                                    .text
                                                    .clone()
                                                    .or(neighbor.textual_identifier.clone())
                                                    .unwrap_or_else(|| neighbor_id.clone());
                                                let strength = rel
                                                    .strength
                                                    .map(|s| format!("{:.0}", s))
                                                    .unwrap_or_default();
                                                Some(view! {
                                                    <tr>
                                                        <td>
                                                            <a
                                                                href="#"
                                                                class="table__link"
                                                                on:click=move |e| {
                                                                    e.prevent_default();
                                                                    navigator.redirect_to_view(
                                                                        &neighbor_id,
                                                                        &kind_for_click,
                                                                    );
                                                                }
                                                            >
                                                                {label}
                                                            </a>
                                                        </td>
                                                        <td>
                                                            <span class="badge badge--neutral">{kind}</span>
                                                        </td>
                                                        <td>{strength}</td>
                                                    </tr>
                                                })
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </section>

                            <section class="detail-section">
                                <h2>{format!("Other connections ({})", other.len())}</h2>
                                <ul class="link-list">
                                    {other
                                        .into_iter()
                                        .filter_map(|conn| {
                                            let neighbor = conn.neighbor?;
                                            let neighbor_id = neighbor.id.clone()?;
                                            let kind = conn.neighbor_type.clone().unwrap_or_default();
                                            let rel_type = conn.rel_type.clone().unwrap_or_default();
                                            let kind_for_click = kind.clone();
                                            let label = neighbor
                                                .text
                                                .clone()
                                                .or(neighbor.textual_identifier.clone())
                                                .unwrap_or_else(|| neighbor_id.clone());
                                            Some(view! {
                                                <li>
                                                    <span class="badge badge--muted">{rel_type}</span>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            navigator.redirect_to_view(
                                                                &neighbor_id,
                                                                &kind_for_click,
                                                            );
                                                        }
                                                    >
                                                        {preview(&label, 80)}
                                                    </a>
                                                    <span class="badge badge--neutral">{kind}</span>
                                                </li>
                                            })
                                        })
                                        .collect_view()}
                                </ul>
                            </section>

                            <section class="detail-section">
                                <h2>{format!("Sentences ({})", hlcs.len())}</h2>
                                <ul class="link-list">
                                    {hlcs
                                        .into_iter()
                                        .map(|hlc| {
                                            let hlc_id = hlc.id.clone();
                                            let label = hlc.text.clone().unwrap_or_else(|| hlc.id.clone());
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
                                                        {preview(&label, 120)}
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
                    view! { <div class="placeholder">"Medium-level concept not found"</div> }.into_any()
                }
            }}
        </div>
    }
}
