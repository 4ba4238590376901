//! Route content registry - the single source of truth for mapping a route
//! name to its view.
//!
//! Components are constructed here on first render of their route, so every
//! view except the home landing loads lazily on navigation. Unknown names
//! fall through to a placeholder; the table-driven callers (navbar,
//! dispatcher) only use names declared in the route table, so that arm is a
//! configuration defect, not an expected state.

use crate::domain::entity::ui::details::EntityDetails;
use crate::domain::extraction::ui::details::ExtractionDetails;
use crate::domain::extraction::ui::list::ExtractionList;
use crate::domain::hlc::ui::details::HlcDetails;
use crate::domain::mlc::ui::details::MlcDetails;
use crate::domain::source::ui::list::SourceList;
use crate::routes::navigator::NavigationRequest;
use crate::routes::routes;
use crate::system::pages::about::AboutView;
use crate::system::pages::compare::CompareView;
use crate::system::pages::home::HomeView;
use crate::system::pages::search::SearchView;
use crate::system::pages::workspace::WorkspaceView;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the view for the requested route. Detail routes receive the
/// `id` parameter as-is; an absent parameter arrives as the empty string
/// and the detail view reports the missing record.
pub fn render_route_content(request: &NavigationRequest) -> AnyView {
    let id = request.id.clone().unwrap_or_default();

    match request.name {
        // ═══════════════════════════════════════════════════════════════════
        // Pages
        // ═══════════════════════════════════════════════════════════════════
        routes::HOME => view! { <HomeView /> }.into_any(),
        routes::ABOUT => view! { <AboutView /> }.into_any(),
        routes::SEARCH => view! { <SearchView /> }.into_any(),
        routes::WORKSPACE => view! { <WorkspaceView /> }.into_any(),
        routes::COMPARE => view! { <CompareView /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Lists
        // ═══════════════════════════════════════════════════════════════════
        routes::EXTRACTION_LIST => view! { <ExtractionList /> }.into_any(),
        routes::SOURCE => view! { <SourceList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Detail views
        // ═══════════════════════════════════════════════════════════════════
        routes::EXTRACTION_DETAIL => view! { <ExtractionDetails id=id /> }.into_any(),
        routes::HLC_DETAIL => view! { <HlcDetails id=id /> }.into_any(),
        routes::MLC_DETAIL => view! { <MlcDetails id=id /> }.into_any(),
        routes::ENTITY_DETAIL => view! { <EntityDetails id=id /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Unknown / Fallback
        // ═══════════════════════════════════════════════════════════════════
        name => {
            log!("⚠️ Unknown route name: {}", name);
            view! { <div class="placeholder">"Page not found"</div> }.into_any()
        }
    }
}
