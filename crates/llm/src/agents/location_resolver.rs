use crate::json::parse_json_response;
use crate::{CompletionRequest, LlmClient};
use anyhow::{anyhow, Result};
use domain::Vertex;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Human-readable place for a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAddress {
    pub city: String,
    /// State or administrative division
    pub state: String,
    pub country: String,
    /// Short label, e.g. "Pune, Maharashtra"
    pub description: String,
}

/// Reverse geocoding through the language model
pub struct LocationResolver {
    llm: LlmClient,
}

impl LocationResolver {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    pub async fn resolve(&self, point: &Vertex) -> Result<LocationAddress> {
        let prompt = format!(
            r#"You are a reverse geocoding service. Based on the provided latitude and longitude, identify the city, state, and country. Provide a short description as well.

Latitude: {lat}
Longitude: {lon}

Respond with JSON only:
{{
    "city": "<city>",
    "state": "<state or administrative division>",
    "country": "<country>",
    "description": "<short label such as \"Pune, Maharashtra\">"
}}"#,
            lat = point.lat(),
            lon = point.lon(),
        );

        let response = self
            .llm
            .complete(CompletionRequest::new(&prompt).temperature(0.0).max_tokens(200))
            .await?;
        let address = self.parse_address(&response)?;
        info!(point = %point, "📍 Resolved location: {}", address.description);
        Ok(address)
    }

    fn parse_address(&self, response: &str) -> Result<LocationAddress> {
        let address: LocationAddress = parse_json_response(response)
            .map_err(|e| anyhow!("Failed to parse location: {}", e))?;

        if address.description.trim().is_empty() {
            return Err(anyhow!("Location description is empty"));
        }
        Ok(address)
    }
}
