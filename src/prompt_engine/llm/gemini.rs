// prompt_engine/llm/gemini.rs - Google Gemini structured-output adapter

use super::LLMAdapter;
use crate::config::LabConfig;
use crate::prompt_engine::schema::Schema;
use crate::prompt_engine::types::{EngineError, LLMError};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const JSON_MIME: &str = "application/json";

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig<'a> {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a Schema,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

pub struct GeminiAdapter {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl GeminiAdapter {
    /// Fails rather than fall back to a client without the configured timeout
    pub fn new(api_key: String, config: &LabConfig) -> Result<Self, EngineError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EngineError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }

    /// Strip a Markdown code fence the model sometimes wraps around JSON
    fn clean_payload(text: &str) -> String {
        static FENCE_RE: OnceLock<Regex> = OnceLock::new();
        let re = FENCE_RE.get_or_init(|| {
            Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").expect("valid fence regex")
        });

        match re.captures(text) {
            Some(caps) => caps[1].to_string(),
            None => text.trim().to_string(),
        }
    }
}

#[async_trait]
impl LLMAdapter for GeminiAdapter {
    async fn generate_json(&self, prompt: &str, schema: &Schema) -> Result<String, LLMError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME,
                response_schema: schema,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LLMError::Timeout
                } else {
                    LLMError::NetworkError(format!("Gemini: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return match status.as_u16() {
                401 | 403 => Err(LLMError::AuthenticationError),
                429 => Err(LLMError::RateLimitError),
                _ => {
                    let body = response.text().await.unwrap_or_default();
                    Err(LLMError::ProviderError(format!("Gemini {}: {}", status, body)))
                }
            };
        }

        // The timeout also covers reading the body
        let gemini: GeminiResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LLMError::Timeout
            } else {
                LLMError::ProviderError(format!("Gemini parse: {}", e))
            }
        })?;

        let text = gemini
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| Self::clean_payload(&p.text))
            .ok_or(LLMError::InvalidResponse)?;

        if text.is_empty() {
            return Err(LLMError::InvalidResponse);
        }

        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_payload_strips_json_fence() {
        let fenced = "```json\n{\"reply\": \"ok\"}\n```";
        assert_eq!(GeminiAdapter::clean_payload(fenced), "{\"reply\": \"ok\"}");
    }

    #[test]
    fn clean_payload_leaves_bare_json() {
        assert_eq!(GeminiAdapter::clean_payload("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn endpoint_uses_configured_base_and_model() {
        let config = LabConfig {
            api_base: "http://localhost:9999/".to_string(),
            model: "test-model".to_string(),
            ..LabConfig::default()
        };
        let adapter = GeminiAdapter::new("k".to_string(), &config).unwrap();
        assert_eq!(
            adapter.endpoint(),
            "http://localhost:9999/v1beta/models/test-model:generateContent"
        );
    }
}
