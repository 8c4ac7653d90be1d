// prompt_engine/llm/mod.rs - LLM trait for structured-output generation

pub mod gemini;

use super::schema::Schema;
use super::types::LLMError;
use async_trait::async_trait;

pub use gemini::GeminiAdapter;

/// Trait for LLM adapters that can answer with JSON matching a declared schema
#[async_trait]
pub trait LLMAdapter: Send + Sync {
    /// Generate JSON text for `prompt`, constrained by `schema`
    async fn generate_json(&self, prompt: &str, schema: &Schema) -> Result<String, LLMError>;

    /// Provider name
    fn name(&self) -> &str;

    /// Model identifier used for requests
    fn model(&self) -> &str;
}
