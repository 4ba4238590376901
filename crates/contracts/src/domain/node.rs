use serde::{Deserialize, Serialize};

/// Graph node of any label, as returned by `GET /nodes/search` and the
/// workspace endpoints. `labels` carries the node labels in graph order;
/// the first one decides which detail view a click navigates to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub textual_identifier: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Relevance weight; search ranks by it, workspace lists reuse it for
    /// relationship counts.
    #[serde(default)]
    pub strength: Option<i64>,
}

impl GraphNode {
    /// First label of the node, the type tag the redirect dispatcher takes.
    pub fn primary_label(&self) -> &str {
        self.labels.first().map(String::as_str).unwrap_or("")
    }

    pub fn display_identifier(&self) -> &str {
        self.textual_identifier
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.text.as_deref())
            .unwrap_or(&self.id)
    }
}
