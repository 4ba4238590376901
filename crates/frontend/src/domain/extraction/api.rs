use crate::shared::api_utils::api_url;
use contracts::domain::extraction::{ExtractionCreate, ExtractionResponse};
use gloo_net::http::Request;

/// Fetch the most recent extractions (the backend caps the list at 10).
pub async fn get_extractions() -> Result<Vec<ExtractionResponse>, String> {
    let response = Request::get(&api_url("/extractions"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    // The backend reports an empty database as 404
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

/// Fetch one extraction with its sentences and entities.
pub async fn get_extraction(id: &str) -> Result<ExtractionResponse, String> {
    let url = api_url(&format!("/extractions/{}", urlencoding::encode(id)));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Submit a new text for extraction. The backend splits it into sentences
/// and builds the concept chains before responding.
pub async fn create_extraction(payload: &ExtractionCreate) -> Result<ExtractionResponse, String> {
    let response = Request::post(&api_url("/extractions"))
        .json(payload)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
