//! Top navigation bar with the application's entry routes.

use crate::routes::navigator::{use_navigator, NavigationRequest};
use crate::routes::route_labels::page_title_for_route;
use crate::routes::routes;
use leptos::prelude::*;

/// Top-level routes shown in the navbar, in display order. Detail routes
/// are reached from rows and links, not from here.
const NAV_ROUTES: &[&str] = &[
    routes::HOME,
    routes::EXTRACTION_LIST,
    routes::SOURCE,
    routes::SEARCH,
    routes::WORKSPACE,
    routes::COMPARE,
    routes::ABOUT,
];

#[component]
pub fn Navbar() -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <header class="navbar">
            <div
                class="navbar__brand"
                on:click=move |_| navigator.push(NavigationRequest::to(routes::HOME))
            >
                "MSCT"
            </div>
            <nav class="navbar__links">
                {NAV_ROUTES
                    .iter()
                    .map(|&name| {
                        view! {
                            <button
                                class="navbar__link"
                                class=("navbar__link--active", move || {
                                    navigator.current.get().name == name
                                })
                                on:click=move |_| navigator.push(NavigationRequest::to(name))
                            >
                                {page_title_for_route(name)}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
