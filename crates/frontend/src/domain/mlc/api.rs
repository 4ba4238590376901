use crate::shared::api_utils::api_url;
use contracts::domain::mlc::MlcDetail;
use gloo_net::http::Request;

/// Fetch one medium-level concept with its strongest neighbors and the
/// sentences and extractions it occurs in.
pub async fn get_mlc(id: &str) -> Result<MlcDetail, String> {
    let url = api_url(&format!("/mlc/{}", urlencoding::encode(id)));

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
