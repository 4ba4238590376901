use crate::shared::api_utils::api_url;
use contracts::domain::source::Source;
use gloo_net::http::Request;

/// Fetch all sources.
pub async fn get_sources() -> Result<Vec<Source>, String> {
    let response = Request::get(&api_url("/sources"))
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
