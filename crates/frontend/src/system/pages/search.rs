use crate::routes::navigator::use_navigator;
use crate::shared::date_utils::{format_datetime, preview};
use crate::system::api;
use contracts::domain::node::GraphNode;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Label filters offered next to the search box, in the backend's `:Label`
/// notation (empty = all labels).
const TYPE_FILTERS: &[(&str, &str)] = &[
    ("", "All types"),
    (":Extraction", "Extractions"),
    (":HLC", "High level concepts"),
    (":MLC", "Medium level concepts"),
    (":Entity", "Entities"),
];

#[component]
pub fn SearchView() -> impl IntoView {
    let navigator = use_navigator();

    let (query, set_query) = signal(String::new());
    let (node_type, set_node_type) = signal(String::new());
    let (searching, set_searching) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let results: RwSignal<Vec<GraphNode>> = RwSignal::new(Vec::new());

    // Generation counter so a stale debounce run drops its result instead
    // of overwriting a newer one.
    let generation = StoredValue::new(0u32);

    let run_search = move || {
        let text = query.get_untracked();
        let type_filter = node_type.get_untracked();
        if text.trim().is_empty() {
            results.set(Vec::new());
            set_error.set(None);
            return;
        }
        spawn_local(async move {
            set_searching.set(true);
            set_error.set(None);
            match api::search_nodes(&text, &type_filter).await {
                Ok(nodes) => {
                    log!("Search '{}' matched {} nodes", text, nodes.len());
                    results.set(nodes);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_searching.set(false);
        });
    };

    let on_query_input = move |ev| {
        set_query.set(event_target_value(&ev));
        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(300).await;
            if generation.get_value() != current {
                return;
            }
            run_search();
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Search"</h1>
                </div>
            </div>

            <div class="form-group form-group--inline">
                <input
                    type="text"
                    class="search__input"
                    placeholder="Search texts, concepts and entities..."
                    prop:value=move || query.get()
                    on:input=on_query_input
                />
                <select on:change=move |ev| {
                    set_node_type.set(event_target_value(&ev));
                    run_search();
                }>
                    {TYPE_FILTERS
                        .iter()
                        .map(|&(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
                {move || searching.get().then(|| view! {
                    <span class="page__meta">"Searching..."</span>
                })}
            </div>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Match"</th>
                            <th>"Type"</th>
                            <th>"Created"</th>
                            <th>"Relevance"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || results.get()
                            key=|node| node.id.clone()
                            children=move |node| {
                                let node_id = node.id.clone();
                                let tag = node.primary_label().to_string();
                                let tag_for_badge = tag.clone();
                                let label = preview(node.display_identifier(), 100);
                                let created = node
                                    .creation_time
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_default();
                                let strength = node
                                    .strength
                                    .map(|s| s.to_string())
                                    .unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    // The concrete detail route depends on the
                                                    // node label, so go through the dispatcher.
                                                    navigator.redirect_to_view(&node_id, &tag);
                                                }
                                            >
                                                {label}
                                            </a>
                                        </td>
                                        <td>
                                            <span class="badge badge--neutral">{tag_for_badge}</span>
                                        </td>
                                        <td>{created}</td>
                                        <td>{strength}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || {
                !searching.get() && results.get().is_empty() && !query.get().trim().is_empty()
                    && error.get().is_none()
            }>
                <div class="placeholder">"Nothing matched."</div>
            </Show>
        </div>
    }
}
