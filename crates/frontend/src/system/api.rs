//! API calls for the cross-domain pages (search, workspace, compare).
//!
//! The backend reports "nothing found" as 404 on these endpoints; that is an
//! empty result for the UI, not an error.

use crate::shared::api_utils::api_url;
use contracts::domain::node::GraphNode;
use contracts::domain::workspace::{ImportantMlc, Ngram, PhraseOverlap};
use gloo_net::http::Request;

/// Search nodes by text. `node_type` is a label filter in the backend's
/// `:Label` notation, empty for all labels.
pub async fn search_nodes(query: &str, node_type: &str) -> Result<Vec<GraphNode>, String> {
    let url = api_url(&format!(
        "/nodes/search?query={}&node_type={}",
        urlencoding::encode(query),
        urlencoding::encode(node_type)
    ));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(Vec::new());
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the MLCs with the most `RELATED_TO` relationships, optionally
/// restricted to one extraction.
pub async fn get_important_mlcs(extraction_id: Option<&str>) -> Result<Vec<ImportantMlc>, String> {
    let url = match extraction_id {
        Some(id) if !id.is_empty() => api_url(&format!(
            "/workspace/important-mlcs?extraction_id={}",
            urlencoding::encode(id)
        )),
        _ => api_url("/workspace/important-mlcs"),
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(Vec::new());
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the most recently created extractions and entities.
pub async fn get_recent_creations() -> Result<Vec<GraphNode>, String> {
    let response = Request::get(&api_url("/workspace/recent-creations"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(Vec::new());
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch word sequences repeated across sentences, optionally restricted
/// to one extraction.
pub async fn get_ngrams(extraction_id: Option<&str>) -> Result<Vec<Ngram>, String> {
    let url = match extraction_id {
        Some(id) if !id.is_empty() => api_url(&format!(
            "/workspace/n-grams?extraction_id={}",
            urlencoding::encode(id)
        )),
        _ => api_url("/workspace/n-grams"),
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(Vec::new());
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the phrases two extractions share.
pub async fn compare_extractions(
    extraction_id_1: &str,
    extraction_id_2: &str,
) -> Result<Vec<PhraseOverlap>, String> {
    let url = api_url(&format!(
        "/compare-extractions?extraction_id_1={}&extraction_id_2={}",
        urlencoding::encode(extraction_id_1),
        urlencoding::encode(extraction_id_2)
    ));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(Vec::new());
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
