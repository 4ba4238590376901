//! Static route table: path pattern → route name → view.
//!
//! The table is fixed at startup and never mutated. Views are not referenced
//! here; `registry::render_route_content` constructs the component for a
//! route on first render, so all views except the home landing are built
//! lazily on navigation.

use crate::layout::Shell;
use crate::routes::navigator::{use_navigator, NavigationRequest};
use crate::routes::registry::render_route_content;
use leptos::prelude::*;

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const EXTRACTION_LIST: &str = "extraction";
pub const EXTRACTION_DETAIL: &str = "extractionDetail";
pub const SOURCE: &str = "Source";
pub const HLC_DETAIL: &str = "High Level Concept Detail";
pub const MLC_DETAIL: &str = "Medium Level Concept Detail";
pub const ENTITY_DETAIL: &str = "Entity Detail";
pub const SEARCH: &str = "Search";
pub const WORKSPACE: &str = "Workspace";
pub const COMPARE: &str = "Compare";

/// One entry of the route table. A path pattern holds at most one `:id`
/// parameter segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
}

/// The complete route table. Route names used elsewhere (navbar, redirect
/// dispatcher) must be a subset of the names declared here, covered by
/// tests below.
pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: "/", name: HOME },
    RouteDef { path: "/about", name: ABOUT },
    RouteDef { path: "/extraction", name: EXTRACTION_LIST },
    RouteDef { path: "/extraction/:id", name: EXTRACTION_DETAIL },
    RouteDef { path: "/source", name: SOURCE },
    RouteDef { path: "/hlc/:id", name: HLC_DETAIL },
    RouteDef { path: "/mlc/:id", name: MLC_DETAIL },
    RouteDef { path: "/entity/:id", name: ENTITY_DETAIL },
    RouteDef { path: "/search", name: SEARCH },
    RouteDef { path: "/workspace", name: WORKSPACE },
    RouteDef { path: "/compare", name: COMPARE },
];

pub fn route_by_name(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|route| route.name == name)
}

/// Resolve a concrete URL path against the table. The `:id` segment value
/// is percent-decoded. Query string and fragment are ignored.
pub fn match_path(path: &str) -> Option<NavigationRequest> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let actual: Vec<&str> = path.trim_matches('/').split('/').collect();

    'routes: for route in ROUTES {
        let pattern: Vec<&str> = route.path.trim_matches('/').split('/').collect();
        if pattern.len() != actual.len() {
            continue;
        }
        let mut id = None;
        for (pattern_seg, actual_seg) in pattern.iter().zip(&actual) {
            if pattern_seg.starts_with(':') {
                id = Some(
                    urlencoding::decode(actual_seg)
                        .map(|s| s.into_owned())
                        .unwrap_or_else(|_| (*actual_seg).to_string()),
                );
            } else if pattern_seg != actual_seg {
                continue 'routes;
            }
        }
        return Some(NavigationRequest {
            name: route.name,
            id,
        });
    }
    None
}

/// Build the URL path for a request, percent-encoding the id. `None` when
/// the route name is not in the table.
pub fn path_for(request: &NavigationRequest) -> Option<String> {
    let route = route_by_name(request.name)?;
    let mut url = String::new();
    for segment in route.path.trim_matches('/').split('/') {
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        if segment.starts_with(':') {
            let id = request.id.as_deref().unwrap_or("");
            url.push_str(&urlencoding::encode(id));
        } else {
            url.push_str(segment);
        }
    }
    if url.is_empty() {
        url.push('/');
    }
    Some(url)
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let navigator = use_navigator();

    // Initialize router integration. This runs once when the component is
    // created: adopt the path the page was opened on, then keep the browser
    // URL and document title in sync with the current route.
    navigator.init_router_integration();

    view! {
        <Shell>
            {move || {
                let request = navigator.current.get();
                render_route_content(&request)
            }}
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_names_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate route name");
            }
        }
    }

    #[test]
    fn route_paths_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path, b.path, "duplicate route path");
            }
        }
    }

    #[test]
    fn matches_static_routes() {
        assert_eq!(match_path("/"), Some(NavigationRequest::to(HOME)));
        assert_eq!(match_path("/search"), Some(NavigationRequest::to(SEARCH)));
        assert_eq!(
            match_path("/extraction"),
            Some(NavigationRequest::to(EXTRACTION_LIST))
        );
        // trailing slash is tolerated
        assert_eq!(
            match_path("/workspace/"),
            Some(NavigationRequest::to(WORKSPACE))
        );
    }

    #[test]
    fn matches_parameterized_routes() {
        assert_eq!(
            match_path("/extraction/42"),
            Some(NavigationRequest::with_id(EXTRACTION_DETAIL, "42"))
        );
        assert_eq!(
            match_path("/hlc/abc-1"),
            Some(NavigationRequest::with_id(HLC_DETAIL, "abc-1"))
        );
        // the id segment is percent-decoded
        assert_eq!(
            match_path("/entity/a%20b"),
            Some(NavigationRequest::with_id(ENTITY_DETAIL, "a b"))
        );
    }

    #[test]
    fn unknown_paths_do_not_match() {
        assert_eq!(match_path("/nope"), None);
        assert_eq!(match_path("/extraction/42/extra"), None);
        assert_eq!(match_path("/hlc"), None);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(
            match_path("/search?query=lee"),
            Some(NavigationRequest::to(SEARCH))
        );
        assert_eq!(
            match_path("/mlc/tok-9#chain"),
            Some(NavigationRequest::with_id(MLC_DETAIL, "tok-9"))
        );
    }

    #[test]
    fn path_for_inverts_match_path() {
        for request in [
            NavigationRequest::to(HOME),
            NavigationRequest::to(COMPARE),
            NavigationRequest::with_id(EXTRACTION_DETAIL, "42"),
            NavigationRequest::with_id(ENTITY_DETAIL, "a b/c"),
        ] {
            let url = path_for(&request).expect("route is in the table");
            assert_eq!(match_path(&url), Some(request));
        }
    }

    #[test]
    fn path_for_unknown_name_is_none() {
        assert_eq!(path_for(&NavigationRequest::to("nonexistent")), None);
    }
}
