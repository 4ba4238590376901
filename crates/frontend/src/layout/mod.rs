pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 Navbar                    |
/// +------------------------------------------+
/// |              Routed content               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Navbar />

            // Routed content area - the registry swaps views in here
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
