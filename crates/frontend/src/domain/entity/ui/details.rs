use crate::domain::entity::api;
use crate::routes::navigator::use_navigator;
use crate::routes::route_labels::{detail_page_title, pick_identifier};
use crate::shared::date_utils::{format_datetime, preview};
use contracts::domain::entity::{EntityDetail, RelationshipCreate};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Detail view of one entity: its properties and connection table, plus a
/// form adding a relationship to another node (or a plain property when no
/// target node is given). Connection rows dispatch by their node label.
#[component]
pub fn EntityDetails(id: String) -> impl IntoView {
    let navigator = use_navigator();

    let (entity, set_entity) = signal::<Option<EntityDetail>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (reload_trigger, set_reload_trigger) = signal::<u32>(0);

    // Relationship form state
    let (rel_type, set_rel_type) = signal(String::new());
    let (rel_target_id, set_rel_target_id) = signal(String::new());
    let (rel_target_type, set_rel_target_type) = signal("Entity".to_string());
    let (rel_target_text, set_rel_target_text) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let known_types: RwSignal<Vec<String>> = RwSignal::new(Vec::new());

    let id_for_effect = id.clone();
    Effect::new(move |_| {
        // Re-fetch after a relationship was added
        let _ = reload_trigger.get();

        let id = id_for_effect.clone();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::get_entity(&id).await {
                Ok(data) => {
                    log!(
                        "Loaded entity '{}' with {} connections",
                        data.id,
                        data.simplified_connections.len()
                    );
                    set_entity.set(Some(data));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    Effect::new(move |_| {
        spawn_local(async move {
            // The datalist of known relationship types is a convenience;
            // failures only cost the suggestions.
            match api::get_relationship_types().await {
                Ok(types) => known_types.set(types.relationship_types),
                Err(e) => leptos::logging::warn!("Failed to load relationship types: {}", e),
            }
        });
    });

    let entity_id_for_form = id.clone();
    let on_add_relationship = move |_| {
        let relationship_type = rel_type.get_untracked().trim().to_string();
        if relationship_type.is_empty() {
            set_form_error.set(Some("Relationship type is required".to_string()));
            return;
        }
        let target_id = rel_target_id.get_untracked();
        let target_text = rel_target_text.get_untracked();
        if target_id.is_empty() && target_text.is_empty() {
            set_form_error.set(Some(
                "Either a target id or a target text is required".to_string(),
            ));
            return;
        }

        let payload = RelationshipCreate {
            source_id: entity_id_for_form.clone(),
            source_type: "Entity".to_string(),
            target_id: Some(target_id).filter(|s| !s.is_empty()),
            target_type: rel_target_type.get_untracked(),
            relationship_type,
            target_text: Some(target_text).filter(|s| !s.is_empty()),
        };

        set_saving.set(true);
        set_form_error.set(None);
        spawn_local(async move {
            match api::create_relationship(&payload).await {
                Ok(ack) => {
                    log!("{}", ack.message);
                    set_saving.set(false);
                    set_rel_type.set(String::new());
                    set_rel_target_id.set(String::new());
                    set_rel_target_text.set(String::new());
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(e) => {
                    set_form_error.set(Some(e));
                    set_saving.set(false);
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
                } else if let Some(data) = entity.get() {
                    let identifier = pick_identifier(
                        data.textual_identifier.as_deref(),
                        data.text.as_deref(),
                        &data.id,
                    )
                    .to_string();
                    let heading = detail_page_title("Entity", &identifier);
                    let created = data
                        .creation_time
                        .as_deref()
                        .map(format_datetime)
                        .unwrap_or_default();
                    let text = data.text.clone().unwrap_or_default();
                    let connections = data.simplified_connections.clone();
                    let properties = serde_json::to_string_pretty(&data.properties)
                        .unwrap_or_default();

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
                                <h2>"Text"</h2>
                                <p class="detail-section__text">{text}</p>
                            </section>

                            <section class="detail-section">
                                <h2>"Properties"</h2>
                                <pre class="detail-section__code">{properties}</pre>
                            </section>

                            <section class="detail-section">
                                <h2>{format!("Connections ({})", connections.len())}</h2>
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Relationship"</th>
                                            <th>"Neighbor"</th>
                                            <th>"Type"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {connections
                                            .into_iter()
                                            .filter_map(|conn| {
                                                let neighbor_id = conn.neighbor.clone()?;
                                                let node_type = conn.node_type.clone().unwrap_or_default();
                                                let node_type_for_click = node_type.clone();
                                                let rel = conn.rel_type.clone().unwrap_or_default();
                                                let label = conn
                                                    .text
                                                    .clone()
                                                    .filter(|s| !s.is_empty())
                                                    .unwrap_or_else(|| neighbor_id.clone());
                                                Some(view! {
                                                    <tr>
                                                        <td>
                                                            <span class="badge badge--muted">{rel}</span>
                                                        </td>
                                                        <td>
                                                            <a
                                                                href="#"
                                                                class="table__link"
                                                                on:click=move |e| {
                                                                    e.prevent_default();
                                                                    navigator.redirect_to_view(
                                                                        &neighbor_id,
                                                                        &node_type_for_click,
                                                                    );
                                                                }
                                                            >
                                                                {preview(&label, 100)}
                                                            </a>
                                                        </td>
                                                        <td>
                                                            <span class="badge badge--neutral">{node_type}</span>
                                                        </td>
                                                    </tr>
                                                })
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </section>

                            <section class="detail-section">
                                <h2>"Add relationship"</h2>
                                <div class="form-group form-group--inline">
                                    <input
                                        type="text"
                                        list="relationship-types"
                                        placeholder="Relationship type, e.g. PART_OF"
                                        prop:value=move || rel_type.get()
                                        on:input=move |ev| set_rel_type.set(event_target_value(&ev))
                                        disabled=move || saving.get()
                                    />
                                    <datalist id="relationship-types">
                                        {move || {
                                            known_types
                                                .get()
                                                .into_iter()
                                                .map(|t| view! { <option value=t></option> })
                                                .collect_view()
                                        }}
                                    </datalist>
                                    <input
                                        type="text"
                                        placeholder="Target node id (optional)"
                                        prop:value=move || rel_target_id.get()
                                        on:input=move |ev| set_rel_target_id.set(event_target_value(&ev))
                                        disabled=move || saving.get()
                                    />
                                    <select
                                        on:change=move |ev| set_rel_target_type.set(event_target_value(&ev))
                                        disabled=move || saving.get()
                                    >
                                        <option value="Entity">"Entity"</option>
                                        <option value="Extraction">"Extraction"</option>
                                        <option value="HLC">"HLC"</option>
                                        <option value="MLC">"MLC"</option>
                                    </select>
                                    <input
                                        type="text"
                                        placeholder="Target text (when no target id)"
                                        prop:value=move || rel_target_text.get()
                                        on:input=move |ev| set_rel_target_text.set(event_target_value(&ev))
                                        disabled=move || saving.get()
                                    />
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=on_add_relationship.clone()
                                        disabled=Signal::derive(move || saving.get())
                                    >
                                        {move || if saving.get() { "Saving..." } else { "Add" }}
                                    </Button>
                                </div>
                                {move || {
                                    form_error.get().map(|err| view! {
                                        <div class="alert alert--error">{err}</div>
                                    })
                                }}
                            </section>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div class="placeholder">"Entity not found"</div> }.into_any()
                }
            }}
        </div>
    }
}
