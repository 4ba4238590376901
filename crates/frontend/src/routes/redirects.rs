//! Redirect dispatch: from a record's runtime type tag to its detail route.
//!
//! Search results, workspace rows, chain items and connection tables all
//! carry a node label instead of a static link target. The pure
//! `redirect_target` maps `(id, label)` to a navigation request;
//! `Navigator::redirect_to_view` is the side-effecting wrapper around it.

use crate::routes::navigator::NavigationRequest;
use crate::routes::routes;

/// The node labels the graph reports, as a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Extraction,
    Hlc,
    Mlc,
    Entity,
}

impl NodeKind {
    /// Parse a wire tag. Matching is exact: case variants and unknown
    /// strings stay unrecognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Extraction" => Some(Self::Extraction),
            "HLC" => Some(Self::Hlc),
            "MLC" => Some(Self::Mlc),
            "Entity" => Some(Self::Entity),
            _ => None,
        }
    }

    /// Detail route for records of this kind.
    pub fn detail_route(self) -> &'static str {
        match self {
            Self::Extraction => routes::EXTRACTION_DETAIL,
            Self::Hlc => routes::HLC_DETAIL,
            Self::Mlc => routes::MLC_DETAIL,
            Self::Entity => routes::ENTITY_DETAIL,
        }
    }
}

/// Resolve `(id, type tag)` to a navigation request.
///
/// Pure and total: `None` means the tag is not a known node label. The id
/// is passed through untouched, empty ids included; the detail view is
/// responsible for reporting a missing record.
pub fn redirect_target(id: &str, type_tag: &str) -> Option<NavigationRequest> {
    NodeKind::from_tag(type_tag)
        .map(|kind| NavigationRequest::with_id(kind.detail_route(), id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::routes::route_by_name;

    #[test]
    fn known_tags_map_to_their_detail_routes() {
        assert_eq!(
            redirect_target("42", "Extraction"),
            Some(NavigationRequest::with_id(routes::EXTRACTION_DETAIL, "42"))
        );
        assert_eq!(
            redirect_target("abc-1", "HLC"),
            Some(NavigationRequest::with_id(routes::HLC_DETAIL, "abc-1"))
        );
        assert_eq!(
            redirect_target("tok-7", "MLC"),
            Some(NavigationRequest::with_id(routes::MLC_DETAIL, "tok-7"))
        );
        assert_eq!(
            redirect_target("e-3", "Entity"),
            Some(NavigationRequest::with_id(routes::ENTITY_DETAIL, "e-3"))
        );
    }

    #[test]
    fn id_is_passed_through_unmodified() {
        let request = redirect_target(" 42 %", "Extraction").unwrap();
        assert_eq!(request.id.as_deref(), Some(" 42 %"));

        // empty ids are not rejected
        let request = redirect_target("", "Entity").unwrap();
        assert_eq!(request.id.as_deref(), Some(""));
        assert_eq!(request.name, routes::ENTITY_DETAIL);
    }

    #[test]
    fn unknown_tags_yield_no_target() {
        assert_eq!(redirect_target("7", "Unknown"), None);
        assert_eq!(redirect_target("7", ""), None);
        // matching is case-sensitive
        assert_eq!(redirect_target("7", "entity"), None);
        assert_eq!(redirect_target("7", "hlc"), None);
        assert_eq!(redirect_target("7", "Extraction "), None);
    }

    #[test]
    fn repeated_calls_produce_equal_independent_requests() {
        let first = redirect_target("42", "MLC").unwrap();
        let second = redirect_target("42", "MLC").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_dispatch_target_is_in_the_route_table() {
        for kind in [
            NodeKind::Extraction,
            NodeKind::Hlc,
            NodeKind::Mlc,
            NodeKind::Entity,
        ] {
            assert!(
                route_by_name(kind.detail_route()).is_some(),
                "{:?} dispatches to an undeclared route",
                kind
            );
        }
    }
}
