use crate::json::parse_json_response;
use crate::{CompletionRequest, LlmClient, LlmError};
use async_trait::async_trait;
use domain::{ProviderError, ProviderResult, QueryKind, RegionDataProvider, RegionRequest};
use serde::Deserialize;
use tracing::{debug, warn};

const SYSTEM_PROMPT: &str = "You are an agronomy data assistant for Indian farmers. \
You summarise public geospatial datasets for a farm area in one or two plain sentences. \
Always answer with a single JSON object and nothing else.";

#[derive(Debug, Deserialize)]
struct RegionSummary {
    summary: String,
}

impl From<LlmError> for ProviderError {
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::Http { status, body } => ProviderError::Http {
                status,
                message: body,
            },
            LlmError::Transport(e) => ProviderError::Unavailable(e.to_string()),
            LlmError::EmptyResponse => {
                ProviderError::MalformedResponse("empty completion".to_string())
            }
        }
    }
}

/// Region collaborator that asks a language model to summarise the area
pub struct LlmRegionProvider {
    llm: LlmClient,
}

impl LlmRegionProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    fn build_prompt(request: &RegionRequest) -> String {
        let focus = match request.kind {
            QueryKind::LandUse => {
                "the land use / land cover classes and their approximate shares"
            }
            QueryKind::Soil => "soil texture, pH, organic carbon and nutrient levels",
        };

        format!(
            r#"Summarise the {source} data for this area, focusing on {focus}.

Area (WKT, longitude before latitude): {area}

Respond with JSON only:
{{"summary": "<one or two sentences>"}}"#,
            source = request.kind.source_name(),
            focus = focus,
            area = request.descriptor(),
        )
    }

    fn parse_summary(response: &str) -> ProviderResult<String> {
        let parsed: RegionSummary =
            parse_json_response(response).map_err(ProviderError::MalformedResponse)?;
        let summary = parsed.summary.trim();
        if summary.is_empty() {
            return Err(ProviderError::MalformedResponse(
                "summary is empty".to_string(),
            ));
        }
        Ok(summary.to_string())
    }
}

#[async_trait]
impl RegionDataProvider for LlmRegionProvider {
    fn name(&self) -> &str {
        "llm"
    }

    async fn describe(&self, request: RegionRequest) -> ProviderResult<String> {
        let prompt = Self::build_prompt(&request);
        debug!(kind = %request.kind, identifier = %request.identifier, "Asking LLM for region summary");

        let response = self
            .llm
            .complete(
                CompletionRequest::new(&prompt)
                    .system_prompt(SYSTEM_PROMPT)
                    .temperature(0.2)
                    .max_tokens(256),
            )
            .await?;

        Self::parse_summary(&response).map_err(|e| {
            warn!(kind = %request.kind, "Unusable region summary: {}", e);
            e
        })
    }
}
