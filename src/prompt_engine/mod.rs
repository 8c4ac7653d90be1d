// prompt_engine/mod.rs - Main Prompt Engine

pub mod blueprint;
pub mod llm;
pub mod results;
pub mod schema;
mod types;

pub use types::{
    AssembledPrompt, EngineError, EngineMode, LLMError, LabResult, PromptBlueprint,
};

use crate::catalog::{ReplyStance, ToolId};
use crate::config::LabConfig;
use llm::{GeminiAdapter, LLMAdapter};
use uuid::Uuid;

/// One lab execution: which tool, the learner's text, and the reply stance
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRequest {
    pub tool: ToolId,
    pub input: String,
    pub stance: ReplyStance,
}

impl ToolRequest {
    pub fn new(tool: ToolId, input: impl Into<String>) -> Self {
        Self {
            tool,
            input: input.into(),
            stance: ReplyStance::default(),
        }
    }

    pub fn with_stance(mut self, stance: ReplyStance) -> Self {
        self.stance = stance;
        self
    }
}

/// Prompt Engine - assembles RTCF prompts and runs them live or simulated
pub struct PromptLab {
    llm: Option<Box<dyn LLMAdapter>>,
}

impl PromptLab {
    /// Live when the config carries an API key, simulated otherwise
    pub fn new(config: &LabConfig) -> Result<Self, EngineError> {
        let llm = match config.api_key.clone() {
            Some(key) => {
                let adapter: Box<dyn LLMAdapter> = Box::new(GeminiAdapter::new(key, config)?);
                Some(adapter)
            }
            None => None,
        };

        let engine = Self { llm };
        tracing::info!(
            "PromptLab initialized: mode={:?}, model={}",
            engine.mode(),
            config.model
        );
        Ok(engine)
    }

    /// Create from environment
    pub fn from_env() -> Result<Self, EngineError> {
        let config = LabConfig::from_env()?;
        Self::new(&config)
    }

    /// Never contacts the network
    pub fn simulated() -> Self {
        Self { llm: None }
    }

    pub fn with_adapter(adapter: Box<dyn LLMAdapter>) -> Self {
        Self { llm: Some(adapter) }
    }

    pub fn mode(&self) -> EngineMode {
        if self.llm.is_some() {
            EngineMode::Live
        } else {
            EngineMode::Simulated
        }
    }

    /// Assemble the prompt for a request without running it
    pub fn preview(&self, request: &ToolRequest) -> AssembledPrompt {
        request.tool.spec().assemble(&request.input, request.stance)
    }

    /// Run one tool: simulated example when offline, one structured request otherwise
    pub async fn run(&self, request: &ToolRequest) -> Result<LabResult, EngineError> {
        let spec = request.tool.spec();
        let assembled = spec.assemble(&request.input, request.stance);

        let Some(llm) = self.llm.as_ref() else {
            tracing::debug!("Simulated run for '{}'", request.tool);
            return Ok(LabResult {
                output: spec.simulated_output(request.stance),
                blueprint: assembled.blueprint,
            });
        };

        let run_id = Uuid::new_v4();
        tracing::info!(
            "Run {}: tool='{}', provider='{}', model='{}', prompt_len={}",
            run_id,
            request.tool,
            llm.name(),
            llm.model(),
            assembled.prompt_text.len()
        );

        let raw = match llm
            .generate_json(&assembled.prompt_text, &spec.response_schema())
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Run {}: '{}' failed: {:?}", run_id, llm.name(), e);
                return Err(EngineError::Generation(e));
            }
        };

        let output = request.tool.parse_output(&raw).map_err(|source| {
            tracing::warn!("Run {}: response did not match schema: {}", run_id, source);
            EngineError::MalformedResponse {
                tool: request.tool,
                source,
            }
        })?;

        tracing::info!("Run {}: succeeded ({} chars)", run_id, raw.len());

        Ok(LabResult {
            output,
            blueprint: assembled.blueprint,
        })
    }

    // --- Module 1: Drafting ---

    pub async fn reply_wizard(
        &self,
        incoming: &str,
        stance: ReplyStance,
    ) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::ReplyWizard, incoming).with_stance(stance))
            .await
    }

    pub async fn subject_lines(&self, content: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::SubjectLines, content)).await
    }

    pub async fn summarize(&self, content: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::Summarizer, content)).await
    }

    // --- Module 2: Tone ---

    pub async fn analyze_tone(&self, text: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::ToneAnalysis, text)).await
    }

    pub async fn rewrite_for_empathy(&self, text: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::EmpathyRewrite, text)).await
    }

    pub async fn check_clarity(&self, text: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::ClarityCheck, text)).await
    }

    // --- Module 3: Crisis ---

    pub async fn crisis_shield(&self, text: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::CrisisShield, text)).await
    }

    pub async fn detect_escalation(&self, text: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::Escalation, text)).await
    }

    pub async fn root_cause(&self, text: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::RootCause, text)).await
    }

    // --- Module 4: Admin ---

    pub async fn schedule_meeting(&self, thread: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::Meeting, thread)).await
    }

    pub async fn extract_tasks(&self, thread: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::Tasks, thread)).await
    }

    pub async fn craft_out_of_office(&self, context: &str) -> Result<LabResult, EngineError> {
        self.run(&ToolRequest::new(ToolId::OutOfOffice, context)).await
    }
}

impl Default for PromptLab {
    fn default() -> Self {
        Self::simulated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt_engine::results::ToolOutput;
    use crate::prompt_engine::schema::Schema;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Adapter returning a fixed body and recording every prompt it sees
    struct CannedAdapter {
        body: Result<String, ()>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LLMAdapter for CannedAdapter {
        async fn generate_json(&self, prompt: &str, _schema: &Schema) -> Result<String, LLMError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.body
                .clone()
                .map_err(|_| LLMError::NetworkError("connection refused".to_string()))
        }

        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned-1"
        }
    }

    fn canned(body: Result<&str, ()>) -> (PromptLab, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let adapter = CannedAdapter {
            body: body.map(str::to_string),
            prompts: prompts.clone(),
        };
        (PromptLab::with_adapter(Box::new(adapter)), prompts)
    }

    #[tokio::test]
    async fn simulated_meeting_matches_fixture() {
        let lab = PromptLab::simulated();
        let result = lab.schedule_meeting("Can we do Tuesday?").await.unwrap();

        match result.output {
            ToolOutput::Meeting(ref m) => {
                assert_eq!(m.proposed_slots, vec!["Tuesday 3pm".to_string()]);
                assert_eq!(m.confirmation_message, "See you Tuesday.");
            }
            ref other => panic!("unexpected output: {:?}", other),
        }
        assert_eq!(result.blueprint.role, "Professional Scheduler");
    }

    #[tokio::test]
    async fn live_run_sends_assembled_prompt_and_merges_blueprint() {
        let (lab, prompts) = canned(Ok(r#"{"message": "Back Monday."}"#));
        assert_eq!(lab.mode(), EngineMode::Live);

        let result = lab.craft_out_of_office("Away until Monday").await.unwrap();
        assert_eq!(
            serde_json::to_value(&result).unwrap()["message"],
            "Back Monday."
        );
        assert_eq!(result.blueprint.context, "Context: \"Away until Monday\"");

        let sent = prompts.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            "Corporate Communications Manager. Draft a professional OOO auto-responder.. \
             Context: \"Away until Monday\". Format: JSON with 'message'."
        );
    }

    #[tokio::test]
    async fn transport_failure_is_a_typed_generation_error() {
        let (lab, _) = canned(Err(()));
        let err = lab.summarize("thread").await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Generation(LLMError::NetworkError(_))
        ));
    }

    #[tokio::test]
    async fn schema_violation_is_malformed_response() {
        let (lab, _) = canned(Ok(r#"{"warmth": "very"}"#));
        let err = lab.analyze_tone("hi").await.unwrap_err();
        match err {
            EngineError::MalformedResponse { tool, .. } => assert_eq!(tool, ToolId::ToneAnalysis),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn config_without_key_is_simulated() {
        let lab = PromptLab::new(&LabConfig::default()).unwrap();
        assert_eq!(lab.mode(), EngineMode::Simulated);

        let live = PromptLab::new(&LabConfig {
            api_key: Some("key".to_string()),
            ..LabConfig::default()
        })
        .unwrap();
        assert_eq!(live.mode(), EngineMode::Live);
    }

    #[test]
    fn preview_does_not_need_a_key() {
        let lab = PromptLab::simulated();
        let request = ToolRequest::new(ToolId::Tasks, "Ship the deck by EOD");
        let preview = lab.preview(&request);
        assert!(preview.prompt_text.starts_with("Project Manager. "));
        assert!(preview
            .blueprint
            .full_prompt_template
            .contains("Context: Thread: \"Ship the deck by EOD\""));
    }
}
