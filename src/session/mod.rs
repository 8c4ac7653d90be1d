// session/mod.rs - Per-module lab state (idle -> running -> idle)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{LabModule, ReplyStance, ToolId};
use crate::prompt_engine::{EngineError, LabResult, ToolRequest};

pub mod workshop;

pub use workshop::{AppTab, Workshop};

/// Whether the learner is reading the lesson or running the tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ViewMode {
    #[default]
    Theory,
    Lab,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSession {
    pub module: LabModule,
    pub active_tool: ToolId,
    pub view_mode: ViewMode,
    pub input: String,
    pub stance: ReplyStance,
    pub loading: bool,
    pub result: Option<LabResult>,
    pub last_error: Option<String>,
    pub last_run_at: Option<DateTime<Utc>>,
}

impl ModuleSession {
    pub fn new(module: LabModule) -> Self {
        Self {
            module,
            active_tool: module.default_tool(),
            view_mode: ViewMode::Theory,
            input: String::new(),
            stance: ReplyStance::default(),
            loading: false,
            result: None,
            last_error: None,
            last_run_at: None,
        }
    }

    /// Switch tools; always lands on the lesson with nothing displayed
    pub fn select_tool(&mut self, tool: ToolId) {
        if tool.spec().module != self.module {
            tracing::warn!("Tool '{}' is not part of module '{}'", tool, self.module);
            return;
        }

        self.active_tool = tool;
        self.view_mode = ViewMode::Theory;
        self.result = None;
        self.last_error = None;
    }

    pub fn open_lab(&mut self) {
        self.view_mode = ViewMode::Lab;
    }

    pub fn show_theory(&mut self) {
        self.view_mode = ViewMode::Theory;
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn set_stance(&mut self, stance: ReplyStance) {
        self.stance = stance;
    }

    pub fn can_run(&self) -> bool {
        !self.input.is_empty() && !self.loading
    }

    /// Enter the running state. `None` when there is nothing to run or a run is in flight.
    pub fn begin_run(&mut self) -> Option<ToolRequest> {
        if !self.can_run() {
            return None;
        }

        self.loading = true;
        self.last_error = None;
        Some(ToolRequest::new(self.active_tool, self.input.clone()).with_stance(self.stance))
    }

    /// Return to idle with the outcome of a run started for `tool`
    pub fn finish_run(&mut self, tool: ToolId, outcome: Result<LabResult, EngineError>) {
        self.loading = false;

        if tool != self.active_tool {
            tracing::debug!(
                "Discarding result for '{}', active tool is '{}'",
                tool,
                self.active_tool
            );
            return;
        }

        self.last_run_at = Some(Utc::now());
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Run for '{}' failed: {}", tool, e);
                self.last_error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt_engine::LLMError;

    fn simulated(tool: ToolId) -> LabResult {
        let spec = tool.spec();
        LabResult {
            output: spec.simulated_output(ReplyStance::Agree),
            blueprint: spec.assemble("x", ReplyStance::Agree).blueprint,
        }
    }

    #[test]
    fn starts_idle_on_first_tool_in_theory() {
        let session = ModuleSession::new(LabModule::Crisis);
        assert_eq!(session.active_tool, ToolId::CrisisShield);
        assert_eq!(session.view_mode, ViewMode::Theory);
        assert!(!session.loading);
        assert!(session.result.is_none());
    }

    #[test]
    fn empty_input_cannot_run() {
        let mut session = ModuleSession::new(LabModule::Drafting);
        assert!(!session.can_run());
        assert!(session.begin_run().is_none());
        assert!(!session.loading);
    }

    #[test]
    fn begin_run_blocks_a_second_run() {
        let mut session = ModuleSession::new(LabModule::Drafting);
        session.set_input("Can you ship Friday?");
        session.set_stance(ReplyStance::Decline);

        let request = session.begin_run().unwrap();
        assert_eq!(request.tool, ToolId::ReplyWizard);
        assert_eq!(request.stance, ReplyStance::Decline);
        assert!(session.loading);
        assert!(session.begin_run().is_none());
    }

    #[test]
    fn success_is_stored_and_loading_cleared() {
        let mut session = ModuleSession::new(LabModule::Admin);
        session.set_input("thread");
        let request = session.begin_run().unwrap();

        session.finish_run(request.tool, Ok(simulated(request.tool)));
        assert!(!session.loading);
        assert!(session.result.is_some());
        assert!(session.last_run_at.is_some());
    }

    #[test]
    fn failure_keeps_previous_result() {
        let mut session = ModuleSession::new(LabModule::Tone);
        session.set_input("hello");

        let first = session.begin_run().unwrap();
        session.finish_run(first.tool, Ok(simulated(first.tool)));

        let second = session.begin_run().unwrap();
        session.finish_run(
            second.tool,
            Err(EngineError::Generation(LLMError::Timeout)),
        );

        assert!(!session.loading);
        assert!(session.result.is_some());
        assert!(session.last_error.is_some());
    }

    #[test]
    fn selecting_a_tool_clears_results() {
        let mut session = ModuleSession::new(LabModule::Admin);
        session.set_input("thread");
        session.open_lab();
        let request = session.begin_run().unwrap();
        session.finish_run(request.tool, Ok(simulated(request.tool)));

        session.select_tool(ToolId::Tasks);
        assert_eq!(session.active_tool, ToolId::Tasks);
        assert_eq!(session.view_mode, ViewMode::Theory);
        assert!(session.result.is_none());
        assert!(session.last_error.is_none());
    }

    #[test]
    fn late_result_for_previous_tool_is_discarded() {
        let mut session = ModuleSession::new(LabModule::Admin);
        session.set_input("thread");
        let request = session.begin_run().unwrap();

        session.select_tool(ToolId::OutOfOffice);
        session.finish_run(request.tool, Ok(simulated(request.tool)));

        assert!(!session.loading);
        assert!(session.result.is_none());
    }

    #[test]
    fn foreign_tool_is_ignored() {
        let mut session = ModuleSession::new(LabModule::Drafting);
        session.select_tool(ToolId::Meeting);
        assert_eq!(session.active_tool, ToolId::ReplyWizard);
    }
}
