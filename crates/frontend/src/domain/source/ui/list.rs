use crate::domain::source::api;
use crate::shared::date_utils::format_datetime;
use contracts::domain::source::Source;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SourceList() -> impl IntoView {
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let items: RwSignal<Vec<Source>> = RwSignal::new(Vec::new());

    let load_sources = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::get_sources().await {
                Ok(list) => items.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_sources());

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sources"</h1>
                    <span class="badge badge--neutral">
                        {move || items.get().len().to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_sources()
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

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|item| item.id.clone()
                            children=move |item| {
                                let created = item
                                    .creation_time
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>{item.name.clone()}</td>
                                        <td class="table__cell--muted">
                                            {item.description.clone().unwrap_or_default()}
                                        </td>
                                        <td>{created}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
