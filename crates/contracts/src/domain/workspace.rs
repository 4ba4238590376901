use serde::{Deserialize, Serialize};

// ============================================================================
// Workspace - cross-extraction overview payloads
// ============================================================================

/// MLC ranked by how many `RELATED_TO` relationships it participates in,
/// as returned by `GET /workspace/important-mlcs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportantMlc {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub strength: i64,
}

/// Repeated word sequence of an extraction, as returned by
/// `GET /workspace/n-grams`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ngram {
    pub extraction_id: String,
    pub phrase: String,
    pub frequency: i64,
}

/// Phrase occurring in both compared extractions, as returned by
/// `GET /compare-extractions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseOverlap {
    pub phrase: String,
    pub extraction1_freq: i64,
    pub extraction2_freq: i64,
    pub total_frequency: i64,
}
