use crate::shared::api_utils::api_url;
use contracts::domain::hlc::HlcDetail;
use gloo_net::http::Request;

/// Fetch one high-level concept with its token chain, recommendations and
/// parent extractions.
pub async fn get_hlc(id: &str) -> Result<HlcDetail, String> {
    let url = api_url(&format!("/hlc/{}", urlencoding::encode(id)));

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
