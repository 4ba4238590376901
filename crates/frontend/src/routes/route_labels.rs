//! Page headings - single source of truth for route display titles.

use crate::routes::routes;

/// Returns the human heading for a route name. Fallback: empty string.
pub fn page_title_for_route(name: &str) -> &'static str {
    match name {
        routes::HOME => "Home",
        routes::ABOUT => "About",
        routes::EXTRACTION_LIST => "Extractions",
        routes::EXTRACTION_DETAIL => "Extraction",
        routes::SOURCE => "Sources",
        routes::HLC_DETAIL => "High Level Concept",
        routes::MLC_DETAIL => "Medium Level Concept",
        routes::ENTITY_DETAIL => "Entity",
        routes::SEARCH => "Search",
        routes::WORKSPACE => "Workspace",
        routes::COMPARE => "Compare",
        _ => "",
    }
}

/// Returns the first non-empty identifier from the fallback chain.
///
/// Priority order: textual_identifier → text → id
pub fn pick_identifier<'a>(
    textual_identifier: Option<&'a str>,
    text: Option<&'a str>,
    id: &'a str,
) -> &'a str {
    [textual_identifier, text]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(id)
}

/// Builds a detail heading: «<label> · <identifier>».
///
/// Example: `detail_page_title("Entity", "abc-123")` → `"Entity · abc-123"`
pub fn detail_page_title(label: &'static str, identifier: &str) -> String {
    format!("{} · {}", label, identifier)
}
