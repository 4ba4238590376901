use serde::{Deserialize, Serialize};

// ============================================================================
// Entity - user-curated node linked into the concept graph
// ============================================================================

/// One row of the flattened connection table of an entity: relationship
/// type, neighbor id, neighbor label and a text preview (truncated server
/// side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedConnection {
    #[serde(default)]
    pub rel_type: Option<String>,
    /// Id of the neighboring node.
    #[serde(default)]
    pub neighbor: Option<String>,
    /// Label of the neighboring node ("Extraction", "HLC", "MLC", "Entity").
    #[serde(default)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Entity as returned by `GET /entities/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDetail {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub textual_identifier: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    /// Full property map of the node.
    #[serde(default)]
    pub properties: serde_json::Value,
    /// Raw relationship/neighbor pairs; kept opaque, the flattened
    /// `simplified_connections` is what the UI consumes.
    #[serde(default)]
    pub neighbours: Vec<serde_json::Value>,
    #[serde(default)]
    pub simplified_connections: Vec<SimplifiedConnection>,
}

/// Payload for `POST /entities`.
///
/// With `from_hlc` set, the backend wires the new entity to the HLC, its
/// extraction and the given MLC tokens in one go; otherwise it creates a
/// free-standing node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCreate {
    pub text: String,
    pub textual_identifier: String,
    pub id: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub from_hlc: Option<bool>,
    #[serde(default)]
    pub hlc_id: Option<String>,
    #[serde(default)]
    pub mlc_token_ids: Option<Vec<String>>,
    #[serde(default)]
    pub mlc_token_index: Option<i64>,
}

/// Response of `POST /entities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCreated {
    pub id: String,
    pub text: String,
    pub textual_identifier: String,
    #[serde(default)]
    pub creation_time: Option<String>,
}

/// Payload for `POST /link-entity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityLinkingCreate {
    pub entity_id: String,
    #[serde(default)]
    pub hlc_id: Option<String>,
    #[serde(default)]
    pub token_ids: Option<Vec<String>>,
    #[serde(default)]
    pub order: Option<i64>,
}

/// Payload for `POST /relationships`. Without `target_id` the backend
/// stores `target_text` as a property named after the relationship type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipCreate {
    pub source_id: String,
    pub source_type: String,
    pub target_id: Option<String>,
    pub target_type: String,
    pub relationship_type: String,
    #[serde(default)]
    pub target_text: Option<String>,
}

/// Response of `GET /relationship-types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipTypes {
    pub relationship_types: Vec<String>,
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
