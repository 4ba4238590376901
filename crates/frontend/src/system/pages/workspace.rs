use crate::routes::navigator::{use_navigator, NavigationRequest};
use crate::routes::routes;
use crate::shared::date_utils::{format_datetime, preview};
use crate::system::api;
use contracts::domain::node::GraphNode;
use contracts::domain::workspace::{ImportantMlc, Ngram};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Cross-extraction overview: the most connected concepts, the latest
/// records and the phrases that repeat across sentences. The concept and
/// n-gram panels can be narrowed to one extraction id.
#[component]
pub fn WorkspaceView() -> impl IntoView {
    let navigator = use_navigator();

    let (extraction_filter, set_extraction_filter) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let important: RwSignal<Vec<ImportantMlc>> = RwSignal::new(Vec::new());
    let recent: RwSignal<Vec<GraphNode>> = RwSignal::new(Vec::new());
    let ngrams: RwSignal<Vec<Ngram>> = RwSignal::new(Vec::new());

    let load_workspace = move || {
        let filter = extraction_filter.get_untracked();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let filter = filter.trim();
            let filter = (!filter.is_empty()).then_some(filter);

            // The panels are independent; show whatever loads and report
            // the first failure.
            let mut first_error = None;

            match api::get_important_mlcs(filter).await {
                Ok(list) => important.set(list),
                Err(e) => first_error = first_error.or(Some(e)),
            }
            match api::get_recent_creations().await {
                Ok(list) => recent.set(list),
                Err(e) => first_error = first_error.or(Some(e)),
            }
            match api::get_ngrams(filter).await {
                Ok(list) => ngrams.set(list),
                Err(e) => first_error = first_error.or(Some(e)),
            }

            set_error.set(first_error);
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_workspace());

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Workspace"</h1>
                </div>
                <div class="page__header-right">
                    <input
                        type="text"
                        placeholder="Filter by extraction id (optional)"
                        prop:value=move || extraction_filter.get()
                        on:input=move |ev| set_extraction_filter.set(event_target_value(&ev))
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_workspace()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <div class="panel-grid">
                <section class="panel">
                    <h2 class="panel__title">"Important concepts"</h2>
                    <ul class="link-list">
                        <For
                            each=move || important.get()
                            key=|mlc| mlc.id.clone()
                            children=move |mlc| {
                                let mlc_id = mlc.id.clone();
                                let tag = mlc
                                    .labels
                                    .first()
                                    .cloned()
                                    .unwrap_or_else(|| "MLC".to_string());
                                view! {
                                    <li>
                                        <a
                                            href="#"
                                            class="table__link"
                                            on:click=move |e| {
                                                e.prevent_default();
                                                navigator.redirect_to_view(&mlc_id, &tag);
                                            }
                                        >
                                            {mlc.text.clone()}
                                        </a>
                                        <span class="badge badge--neutral">
                                            {format!("{} links", mlc.strength)}
                                        </span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Recent creations"</h2>
                    <ul class="link-list">
                        <For
                            each=move || recent.get()
                            key=|node| node.id.clone()
                            children=move |node| {
                                let node_id = node.id.clone();
                                let tag = node.primary_label().to_string();
                                let tag_for_badge = tag.clone();
                                let label = preview(node.display_identifier(), 80);
                                let created = node
                                    .creation_time
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_default();
                                view! {
                                    <li>
                                        <a
                                            href="#"
                                            class="table__link"
                                            on:click=move |e| {
                                                e.prevent_default();
                                                navigator.redirect_to_view(&node_id, &tag);
                                            }
                                        >
                                            {label}
                                        </a>
                                        <span class="badge badge--neutral">{tag_for_badge}</span>
                                        <span class="page__meta">{created}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Repeated phrases"</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Phrase"</th>
                                <th>"Seen"</th>
                                <th>"Extraction"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || ngrams.get()
                                key=|ngram| format!("{}:{}", ngram.extraction_id, ngram.phrase)
                                children=move |ngram| {
                                    let extraction_id = ngram.extraction_id.clone();
                                    let short_id = preview(&ngram.extraction_id, 12);
                                    view! {
                                        <tr>
                                            <td>{ngram.phrase.clone()}</td>
                                            <td>{format!("{}x", ngram.frequency)}</td>
                                            <td>
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
                                                    {short_id}
                                                </a>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </section>
            </div>
        </div>
    }
}
