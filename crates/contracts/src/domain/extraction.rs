use serde::{Deserialize, Serialize};

// ============================================================================
// Extraction - an ingested text and the concept graph derived from it
// ============================================================================

/// One sentence of an extraction, stored as a high-level concept node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HlcSummary {
    pub hlc_id: String,
    pub text: String,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
}

/// Entity recommended for a span of text (spaCy label or a prior match).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedEntity {
    pub text: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub start_char: Option<i64>,
    #[serde(default)]
    pub end_char: Option<i64>,
    #[serde(default)]
    pub recommended_by: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Raw entity node as the graph returns it (property map of the node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityNode {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub textual_identifier: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
}

/// Extraction as returned by `GET /extractions` and `GET /extractions/{id}`.
///
/// The list endpoint leaves `sentences`/`entities` empty; the detail endpoint
/// fills them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub extraction_id: String,
    #[serde(default)]
    pub textual_identifier: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    pub status: String,
    pub text: String,
    #[serde(default)]
    pub sentences: Option<Vec<HlcSummary>>,
    #[serde(default)]
    pub entities_recommended: Option<Vec<RecommendedEntity>>,
    #[serde(default)]
    pub relationships: Option<Vec<String>>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub entities: Option<Vec<EntityNode>>,
}

impl ExtractionResponse {
    /// Identifier shown in lists and headings: the textual identifier when
    /// present, otherwise the raw id.
    pub fn display_identifier(&self) -> &str {
        self.textual_identifier
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.extraction_id)
    }
}

/// Payload for `POST /extractions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionCreate {
    pub text: String,
    #[serde(default)]
    pub textual_identifier: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
}
