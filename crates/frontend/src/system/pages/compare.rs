use crate::domain::extraction::api as extraction_api;
use crate::system::api;
use contracts::domain::extraction::ExtractionResponse;
use contracts::domain::workspace::PhraseOverlap;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Compares the repeated phrases of two extractions.
#[component]
pub fn CompareView() -> impl IntoView {
    let (extractions, set_extractions) = signal::<Vec<ExtractionResponse>>(Vec::new());
    let (first_id, set_first_id) = signal(String::new());
    let (second_id, set_second_id) = signal(String::new());
    let (comparing, set_comparing) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (compared, set_compared) = signal(false);
    let overlaps: RwSignal<Vec<PhraseOverlap>> = RwSignal::new(Vec::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match extraction_api::get_extractions().await {
                Ok(list) => set_extractions.set(list),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let on_compare = move |_| {
        let id_1 = first_id.get_untracked();
        let id_2 = second_id.get_untracked();
        if id_1.is_empty() || id_2.is_empty() {
            set_error.set(Some("Pick two extractions to compare".to_string()));
            return;
        }
        if id_1 == id_2 {
            set_error.set(Some("Pick two different extractions".to_string()));
            return;
        }
        set_comparing.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::compare_extractions(&id_1, &id_2).await {
                Ok(list) => {
                    overlaps.set(list);
                    set_compared.set(true);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_comparing.set(false);
        });
    };

    let extraction_options = move || {
        extractions
            .get()
            .into_iter()
            .map(|extraction| {
                let id = extraction.extraction_id.clone();
                let label = extraction.display_identifier().to_string();
                view! { <option value=id>{label}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Compare"</h1>
                </div>
            </div>

            <div class="form-group form-group--inline">
                <select on:change=move |ev| set_first_id.set(event_target_value(&ev))>
                    <option value="">"First extraction..."</option>
                    {extraction_options}
                </select>
                <select on:change=move |ev| set_second_id.set(event_target_value(&ev))>
                    <option value="">"Second extraction..."</option>
                    {extraction_options}
                </select>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_compare
                    disabled=Signal::derive(move || comparing.get())
                >
                    {move || if comparing.get() { "Comparing..." } else { "Compare" }}
                </Button>
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
                            <th>"Shared phrase"</th>
                            <th>"First"</th>
                            <th>"Second"</th>
                            <th>"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || overlaps.get()
                            key=|overlap| overlap.phrase.clone()
                            children=move |overlap| {
                                view! {
                                    <tr>
                                        <td>{overlap.phrase.clone()}</td>
                                        <td>{overlap.extraction1_freq}</td>
                                        <td>{overlap.extraction2_freq}</td>
                                        <td>{overlap.total_frequency}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || {
                compared.get() && overlaps.get().is_empty() && error.get().is_none()
            }>
                <div class="placeholder">"No shared phrases between these extractions."</div>
            </Show>
        </div>
    }
}
