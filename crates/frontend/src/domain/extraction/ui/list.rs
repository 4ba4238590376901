use crate::domain::extraction::api;
use crate::domain::source::api as source_api;
use crate::routes::navigator::{use_navigator, NavigationRequest};
use crate::routes::routes;
use crate::shared::date_utils::{format_datetime, preview};
use contracts::domain::extraction::{ExtractionCreate, ExtractionResponse};
use contracts::domain::source::Source;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ExtractionList() -> impl IntoView {
    let navigator = use_navigator();

    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let items: RwSignal<Vec<ExtractionResponse>> = RwSignal::new(Vec::new());
    let sources: RwSignal<Vec<Source>> = RwSignal::new(Vec::new());

    // New-extraction form state
    let (is_form_expanded, set_is_form_expanded) = signal(false);
    let (new_text, set_new_text) = signal(String::new());
    let (new_identifier, set_new_identifier) = signal(String::new());
    let (new_source_id, set_new_source_id) = signal(String::new());
    let (creating, set_creating) = signal(false);
    let (create_error, set_create_error) = signal::<Option<String>>(None);

    let load_extractions = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::get_extractions().await {
                Ok(list) => {
                    leptos::logging::log!("Loaded {} extractions", list.len());
                    items.set(list);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_extractions();
        spawn_local(async move {
            // Sources only feed the create form select; a failure here is
            // not worth an alert.
            match source_api::get_sources().await {
                Ok(list) => sources.set(list),
                Err(e) => leptos::logging::warn!("Failed to load sources: {}", e),
            }
        });
    });

    let on_create = move |_| {
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            set_create_error.set(Some("Text is required".to_string()));
            return;
        }
        let identifier = new_identifier.get_untracked();
        let source_id = new_source_id.get_untracked();
        let payload = ExtractionCreate {
            text,
            textual_identifier: Some(identifier).filter(|s| !s.is_empty()),
            source_id: Some(source_id).filter(|s| !s.is_empty()),
        };
        set_creating.set(true);
        set_create_error.set(None);
        spawn_local(async move {
            match api::create_extraction(&payload).await {
                Ok(created) => {
                    set_creating.set(false);
                    navigator.push(NavigationRequest::with_id(
                        routes::EXTRACTION_DETAIL,
                        created.extraction_id,
                    ));
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
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Extractions"</h1>
                    <span class="badge badge--neutral">
                        {move || items.get().len().to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| set_is_form_expanded.update(|e| *e = !*e)
                    >
                        {move || if is_form_expanded.get() { "Hide form" } else { "New extraction" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_extractions()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <Show when=move || is_form_expanded.get()>
                <div class="form-panel">
                    <div class="form-group">
                        <label for="extraction-text">"Text"</label>
                        <textarea
                            id="extraction-text"
                            rows="6"
                            placeholder="Paste the text to process..."
                            prop:value=move || new_text.get()
                            on:input=move |ev| set_new_text.set(event_target_value(&ev))
                            disabled=move || creating.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="extraction-identifier">"Identifier (optional)"</label>
                        <input
                            type="text"
                            id="extraction-identifier"
                            placeholder="e.g. bruce_lee_intro"
                            prop:value=move || new_identifier.get()
                            on:input=move |ev| set_new_identifier.set(event_target_value(&ev))
                            disabled=move || creating.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="extraction-source">"Source (optional)"</label>
                        <select
                            id="extraction-source"
                            on:change=move |ev| set_new_source_id.set(event_target_value(&ev))
                            disabled=move || creating.get()
                        >
                            <option value="">"No source"</option>
                            {move || {
                                sources
                                    .get()
                                    .into_iter()
                                    .map(|source| {
                                        view! {
                                            <option value=source.id.clone()>{source.name.clone()}</option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    {move || {
                        create_error.get().map(|err| view! {
                            <div class="alert alert--error">{err}</div>
                        })
                    }}
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_create
                        disabled=Signal::derive(move || creating.get())
                    >
                        {move || if creating.get() { "Processing..." } else { "Create" }}
                    </Button>
                </div>
            </Show>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Identifier"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                            <th>"Text"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|item| item.extraction_id.clone()
                            children=move |item| {
                                let id = item.extraction_id.clone();
                                let identifier = item.display_identifier().to_string();
                                let created = item
                                    .creation_time
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_default();
                                let text_preview = preview(&item.text, 120);
                                let status = item.status.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    navigator.push(NavigationRequest::with_id(
                                                        routes::EXTRACTION_DETAIL,
                                                        id.clone(),
                                                    ));
                                                }
                                            >
                                                {identifier}
                                            </a>
                                        </td>
                                        <td>
                                            <span class="badge badge--neutral">{status}</span>
                                        </td>
                                        <td>{created}</td>
                                        <td class="table__cell--muted">{text_preview}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || !loading.get() && items.get().is_empty() && error.get().is_none()>
                <div class="placeholder">"No extractions yet - create one above."</div>
            </Show>
        </div>
    }
}
