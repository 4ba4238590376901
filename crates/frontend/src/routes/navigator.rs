use leptos::logging::{error, log, warn};
use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

use crate::routes::redirects::redirect_target;
use crate::routes::route_labels::page_title_for_route;
use crate::routes::routes::{self, match_path, path_for};

/// One requested transition: target route name plus the sole `id` path
/// parameter. Constructed per call and consumed immediately; nothing
/// retains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub name: &'static str,
    pub id: Option<String>,
}

impl NavigationRequest {
    pub fn to(name: &'static str) -> Self {
        Self { name, id: None }
    }

    pub fn with_id(name: &'static str, id: impl Into<String>) -> Self {
        Self {
            name,
            id: Some(id.into()),
        }
    }
}

/// Owner of the process-wide "current route" state. Provided once via
/// context; everything else requests transitions through `push` and never
/// writes the signal directly.
#[derive(Clone, Copy)]
pub struct Navigator {
    pub current: RwSignal<NavigationRequest>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(NavigationRequest::to(routes::HOME)),
        }
    }

    /// Request a transition. Runs synchronously on the calling event-loop
    /// turn; rendering and URL sync follow reactively. Transitions are not
    /// deduplicated; pushing the current route again is a fresh transition.
    pub fn push(&self, request: NavigationRequest) {
        log!("🔷 navigate: name='{}', id={:?}", request.name, request.id);
        self.current.set(request);
    }

    /// Forward a record to its detail view based on the runtime type tag.
    ///
    /// Unrecognized tags are reported on the console and swallowed: the
    /// triggering click does nothing, no error reaches the caller.
    pub fn redirect_to_view(&self, id: &str, type_tag: &str) {
        match redirect_target(id, type_tag) {
            Some(request) => self.push(request),
            None => error!("Unknown type for redirect: {}", type_tag),
        }
    }

    /// Adopt the path the page was opened on, then keep the browser URL and
    /// document title in sync with the current route. Call once from the
    /// root component.
    pub fn init_router_integration(&self) {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        if !path.is_empty() {
            match match_path(&path) {
                Some(request) => self.current.set(request),
                None => warn!("⚠️ Unknown path '{}', staying on home", path),
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let request = this.current.get();
            let Some(new_url) = path_for(&request) else {
                return;
            };

            let Some(w) = window() else { return };

            if let Some(document) = w.document() {
                let heading = page_title_for_route(request.name);
                let title = if heading.is_empty() {
                    "MSCT".to_string()
                } else {
                    format!("MSCT · {}", heading)
                };
                document.set_title(&title);
            }

            let current_path = w.location().pathname().unwrap_or_default();

            // Only touch history if the URL actually changed
            if current_path != new_url {
                if let Ok(history) = w.history() {
                    let _ = history.push_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator context not found")
}
