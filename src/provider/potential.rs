// src/provider/potential.rs — HTTP gateway to the hosted chatbot endpoint

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ReplyGateway;
use crate::core::emotion::EmotionLabel;
use crate::infra::config::GatewayConfig;
use crate::infra::errors::MindMateError;

/// Client for the `ai.potential.com` style chatbot API: one POST per turn,
/// request `{system, message, AI}`, response `{response}`. Any payload
/// exposing the `response` field conforms; everything else about the
/// protocol belongs to the service.
pub struct PotentialGateway {
    endpoint: String,
    persona: String,
    assistant_name: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    system: &'a str,
    message: String,
    #[serde(rename = "AI")]
    ai: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    response: Option<String>,
}

impl PotentialGateway {
    /// The bounded request timeout expires into the same `Transport` kind
    /// as any other failure, so it never changes how a turn resolves.
    pub fn new(config: &GatewayConfig) -> Result<Self, MindMateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| MindMateError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            persona: config.persona.clone(),
            assistant_name: config.assistant_name.clone(),
            client,
        })
    }

    fn compose_prompt(user_text: &str, emotion: EmotionLabel) -> String {
        format!(
            "Generate a thoughtful response as a mental health assistant to this message: \"{}\". The user appears to be feeling {}.",
            user_text, emotion
        )
    }
}

#[async_trait]
impl ReplyGateway for PotentialGateway {
    async fn generate(
        &self,
        user_text: &str,
        emotion: EmotionLabel,
    ) -> Result<String, MindMateError> {
        let body = GenerationRequest {
            system: &self.persona,
            message: Self::compose_prompt(user_text, emotion),
            ai: &self.assistant_name,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| MindMateError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MindMateError::transport(format!("HTTP {}", status)));
        }

        let payload: GenerationResponse = response
            .json()
            .await
            .map_err(|e| MindMateError::transport(format!("malformed payload: {}", e)))?;

        match payload.response {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(MindMateError::transport("empty reply field")),
        }
    }
}
