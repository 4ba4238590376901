use serde::{Deserialize, Serialize};

use super::extraction::{EntityNode, RecommendedEntity};

// ============================================================================
// HLC - high-level concept, one node per sentence of an extraction
// ============================================================================

/// One link of the ordered token chain under an HLC. A chain item is either
/// an MLC token or an entity that replaced a token run; `type` carries the
/// node label. All fields are optional because the graph reports an empty
/// chain as a single all-null item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl ChainItem {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }
}

/// Parent extraction as embedded in an HLC payload (raw node properties).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub textual_identifier: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// HLC as returned by `GET /hlc/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HlcDetail {
    pub id: String,
    #[serde(default)]
    pub creation_time: Option<String>,
    pub text: String,
    /// Tokenization of the sentence text, in order.
    #[serde(default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub recommended_entities: Vec<RecommendedEntity>,
    /// Ordered chain of MLC tokens and entities under this sentence.
    #[serde(default)]
    pub chain: Vec<ChainItem>,
    #[serde(default)]
    pub extractions: Vec<ExtractionRef>,
    #[serde(default)]
    pub entities: Vec<EntityNode>,
}
