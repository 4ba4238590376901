use serde::{Deserialize, Serialize};

use super::hlc::ExtractionRef;

// ============================================================================
// MLC - medium-level concept, one node per token
// ============================================================================

/// Property map of a neighboring node, as the graph serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeProps {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub textual_identifier: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
}

/// A `RELATED_TO` neighbor with the summed relationship strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedNeighbor {
    #[serde(default)]
    pub strength: Option<f64>,
    #[serde(default)]
    pub rel_type: Option<String>,
    #[serde(default)]
    pub neighbor: Option<NodeProps>,
    #[serde(default)]
    pub neighbor_type: Option<String>,
}

/// Any non-`RELATED_TO`, non-chain connection of the MLC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherConnection {
    #[serde(default)]
    pub rel_type: Option<String>,
    #[serde(default)]
    pub neighbor: Option<NodeProps>,
    #[serde(default)]
    pub neighbor_type: Option<String>,
}

/// Parent HLC as embedded in an MLC payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HlcNode {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
}

/// MLC as returned by `GET /mlc/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlcDetail {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub creation_time: Option<String>,
    /// Full property map of the node, including ad-hoc properties set
    /// through relationship creation.
    #[serde(default)]
    pub properties: serde_json::Value,
    #[serde(default)]
    pub count: i64,
    /// Strongest `RELATED_TO` neighbors, descending by summed strength.
    #[serde(default)]
    pub relationships_with_neighbors: Vec<RelatedNeighbor>,
    #[serde(default)]
    pub other_connections: Vec<OtherConnection>,
    #[serde(default)]
    pub hlcs: Vec<HlcNode>,
    #[serde(default)]
    pub extractions: Vec<ExtractionRef>,
}
