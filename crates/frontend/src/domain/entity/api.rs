use crate::shared::api_utils::api_url;
use contracts::domain::entity::{
    EntityCreate, EntityCreated, EntityDetail, EntityLinkingCreate, MessageResponse,
    RelationshipCreate, RelationshipTypes,
};
use gloo_net::http::Request;

/// Fetch one entity with its connection table.
pub async fn get_entity(id: &str) -> Result<EntityDetail, String> {
    let url = api_url(&format!("/entities/{}", urlencoding::encode(id)));

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

/// Create an entity. With `from_hlc` set the backend also wires it to the
/// HLC, its extraction and the selected MLC tokens.
pub async fn create_entity(payload: &EntityCreate) -> Result<EntityCreated, String> {
    let response = Request::post(&api_url("/entities"))
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

/// Link an existing entity into an HLC's chain.
pub async fn link_entity(payload: &EntityLinkingCreate) -> Result<MessageResponse, String> {
    let response = Request::post(&api_url("/link-entity"))
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

/// Create a relationship from an entity to another node, or store a plain
/// property when no target node is given.
pub async fn create_relationship(payload: &RelationshipCreate) -> Result<MessageResponse, String> {
    let response = Request::post(&api_url("/relationships"))
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

/// Fetch every relationship type present in the graph.
pub async fn get_relationship_types() -> Result<RelationshipTypes, String> {
    let response = Request::get(&api_url("/relationship-types"))
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
