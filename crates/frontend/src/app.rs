use crate::routes::navigator::Navigator;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the Navigator to the whole app via context. It owns the single
    // current-route signal; everything else only requests transitions.
    provide_context(Navigator::new());

    view! {
        <AppRoutes />
    }
}
