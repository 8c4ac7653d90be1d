// prompt_engine/types.rs - Core types for the Prompt Engine

use serde::{Deserialize, Serialize};

use crate::catalog::ToolId;

use super::results::ToolOutput;

/// Displayable breakdown of an assembled prompt (the "blueprint" shown to the learner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptBlueprint {
    pub role: String,
    pub task: String,
    pub context: String,
    pub format: String,
    pub full_prompt_template: String,
}

/// Prompt text sent to the model plus the blueprint describing it
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledPrompt {
    pub prompt_text: String,
    pub blueprint: PromptBlueprint,
}

/// Typed result of one lab run, serialized flat with the blueprint merged in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabResult {
    #[serde(flatten)]
    pub output: ToolOutput,
    pub blueprint: PromptBlueprint,
}

/// Whether the engine talks to the endpoint or serves canned examples
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EngineMode {
    Live,
    Simulated,
}

impl EngineMode {
    pub fn label(&self) -> &'static str {
        match self {
            EngineMode::Live => "Engine Active",
            EngineMode::Simulated => "Simulation Mode",
        }
    }
}

/// Prompt Engine errors
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown module: {0}")]
    UnknownModule(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] LLMError),

    #[error("Malformed {tool} response: {source}")]
    MalformedResponse {
        tool: ToolId,
        #[source]
        source: serde_json::Error,
    },
}

/// LLM adapter errors
#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Authentication failed")]
    AuthenticationError,

    #[error("Rate limit exceeded")]
    RateLimitError,

    #[error("Invalid response from LLM")]
    InvalidResponse,

    #[error("Timeout")]
    Timeout,
}
