use leptos::prelude::*;

#[component]
pub fn AboutView() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"About"</h1>
                </div>
            </div>
            <div class="detail-section">
                <p class="detail-section__text">
                    "MSCT stores texts as layered concept graphs. An extraction \
                     holds the raw text; each of its sentences becomes a \
                     high-level concept, each token a medium-level concept, and \
                     recurring token runs can be merged into entities. \
                     Relationships between all of these are browsable from any \
                     record."
                </p>
                <p class="detail-section__text">
                    "This client only renders and navigates the graph; all \
                     processing happens in the backing graph API."
                </p>
            </div>
        </div>
    }
}
