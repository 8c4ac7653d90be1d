// catalog/mod.rs - Fixed tool catalog: four modules, three tools each

mod tools;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::prompt_engine::blueprint::{assemble, quote_context};
use crate::prompt_engine::results::*;
use crate::prompt_engine::schema::Schema;
use crate::prompt_engine::{AssembledPrompt, EngineError};

/// Thematic module (one navigation tab besides the overview)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabModule {
    Drafting,
    Tone,
    Crisis,
    Admin,
}

impl LabModule {
    pub const ALL: [LabModule; 4] = [
        LabModule::Drafting,
        LabModule::Tone,
        LabModule::Crisis,
        LabModule::Admin,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            LabModule::Drafting => "drafting",
            LabModule::Tone => "tone",
            LabModule::Crisis => "crisis",
            LabModule::Admin => "admin",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LabModule::Drafting => "1: Drafting Patterns",
            LabModule::Tone => "2: Emotional Priming",
            LabModule::Crisis => "3: Chain of Thought",
            LabModule::Admin => "4: Entity Extraction",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LabModule::Drafting => "✍️",
            LabModule::Tone => "🎭",
            LabModule::Crisis => "🛡️",
            LabModule::Admin => "📎",
        }
    }

    /// One-line pitch shown on the overview
    pub fn summary(&self) -> &'static str {
        match self {
            LabModule::Drafting => {
                "Learn the fundamental framework for high-quality email drafts."
            }
            LabModule::Tone => "Discover how to nudge AI toward high-empathy communications.",
            LabModule::Crisis => {
                "Use multi-phase logic to handle angry clients and high-risk threads."
            }
            LabModule::Admin => {
                "Master the art of filtering noise and extracting structured data."
            }
        }
    }

    pub fn tools(&self) -> [ToolId; 3] {
        match self {
            LabModule::Drafting => [ToolId::ReplyWizard, ToolId::SubjectLines, ToolId::Summarizer],
            LabModule::Tone => [
                ToolId::ToneAnalysis,
                ToolId::EmpathyRewrite,
                ToolId::ClarityCheck,
            ],
            LabModule::Crisis => [ToolId::CrisisShield, ToolId::Escalation, ToolId::RootCause],
            LabModule::Admin => [ToolId::Meeting, ToolId::Tasks, ToolId::OutOfOffice],
        }
    }

    pub fn default_tool(&self) -> ToolId {
        self.tools()[0]
    }
}

impl FromStr for LabModule {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LabModule::ALL
            .into_iter()
            .find(|m| m.id() == wanted)
            .ok_or_else(|| EngineError::UnknownModule(s.trim().to_string()))
    }
}

impl fmt::Display for LabModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Identifier of one prompt-engineering exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolId {
    ReplyWizard,
    SubjectLines,
    Summarizer,
    ToneAnalysis,
    EmpathyRewrite,
    ClarityCheck,
    CrisisShield,
    Escalation,
    RootCause,
    Meeting,
    Tasks,
    OutOfOffice,
}

impl ToolId {
    pub const ALL: [ToolId; 12] = [
        ToolId::ReplyWizard,
        ToolId::SubjectLines,
        ToolId::Summarizer,
        ToolId::ToneAnalysis,
        ToolId::EmpathyRewrite,
        ToolId::ClarityCheck,
        ToolId::CrisisShield,
        ToolId::Escalation,
        ToolId::RootCause,
        ToolId::Meeting,
        ToolId::Tasks,
        ToolId::OutOfOffice,
    ];

    /// Static configuration for this tool
    pub fn spec(&self) -> &'static ToolSpec {
        &tools::TOOLS[*self as usize]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ToolId::ReplyWizard => "reply",
            ToolId::SubjectLines => "subject",
            ToolId::Summarizer => "summary",
            ToolId::ToneAnalysis => "tone",
            ToolId::EmpathyRewrite => "empathy",
            ToolId::ClarityCheck => "clarity",
            ToolId::CrisisShield => "shield",
            ToolId::Escalation => "escalation",
            ToolId::RootCause => "root-cause",
            ToolId::Meeting => "meeting",
            ToolId::Tasks => "tasks",
            ToolId::OutOfOffice => "ooo",
        }
    }

    /// Only the reply wizard takes a stance
    pub fn uses_stance(&self) -> bool {
        matches!(self, ToolId::ReplyWizard)
    }

    /// Parse the model's JSON text into this tool's result shape
    pub fn parse_output(&self, raw: &str) -> Result<ToolOutput, serde_json::Error> {
        Ok(match self {
            ToolId::ReplyWizard => ToolOutput::ReplyWizard(serde_json::from_str(raw)?),
            ToolId::SubjectLines => ToolOutput::SubjectLines(serde_json::from_str(raw)?),
            ToolId::Summarizer => ToolOutput::Summarizer(serde_json::from_str(raw)?),
            ToolId::ToneAnalysis => ToolOutput::ToneAnalysis(serde_json::from_str(raw)?),
            ToolId::EmpathyRewrite => ToolOutput::EmpathyRewrite(serde_json::from_str(raw)?),
            ToolId::ClarityCheck => ToolOutput::ClarityCheck(serde_json::from_str(raw)?),
            ToolId::CrisisShield => ToolOutput::CrisisShield(serde_json::from_str(raw)?),
            ToolId::Escalation => ToolOutput::Escalation(serde_json::from_str(raw)?),
            ToolId::RootCause => ToolOutput::RootCause(serde_json::from_str(raw)?),
            ToolId::Meeting => ToolOutput::Meeting(serde_json::from_str(raw)?),
            ToolId::Tasks => ToolOutput::Tasks(serde_json::from_str(raw)?),
            ToolId::OutOfOffice => ToolOutput::OutOfOffice(serde_json::from_str(raw)?),
        })
    }
}

impl FromStr for ToolId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ToolId::ALL
            .into_iter()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| EngineError::UnknownTool(s.trim().to_string()))
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Position the reply wizard should take
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyStance {
    #[default]
    Agree,
    Decline,
    Negotiate,
}

impl ReplyStance {
    pub const ALL: [ReplyStance; 3] = [
        ReplyStance::Agree,
        ReplyStance::Decline,
        ReplyStance::Negotiate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyStance::Agree => "Agree",
            ReplyStance::Decline => "Decline",
            ReplyStance::Negotiate => "Negotiate",
        }
    }
}

impl FromStr for ReplyStance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReplyStance::ALL
            .into_iter()
            .find(|stance| stance.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown stance '{}' (Agree, Decline, Negotiate)", s.trim()))
    }
}

impl fmt::Display for ReplyStance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breakdown of a task instruction shown in the theory view
#[derive(Debug, Clone, Copy)]
pub struct TaskAnatomy {
    pub verb: &'static str,
    pub instruction: &'static str,
    pub constraints: &'static str,
    pub why_it_works: &'static str,
}

/// Pedagogical copy for one tool
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    pub title: &'static str,
    pub role_description: &'static str,
    pub lesson: &'static str,
    pub anatomy: TaskAnatomy,
    pub example_prompts: &'static [&'static str],
    pub workplace_benefit: &'static str,
    pub tip: &'static str,
    pub strategy: &'static str,
}

/// Compile-time configuration of one tool: RTCF parts, schema and canned example
pub struct ToolSpec {
    pub id: ToolId,
    pub module: LabModule,
    pub label: &'static str,
    pub icon: &'static str,
    pub role: &'static str,
    /// May contain `{{stance}}`
    pub task: &'static str,
    pub context_lead: &'static str,
    pub format: &'static str,
    pub schema: fn() -> Schema,
    pub simulated: fn(ReplyStance) -> ToolOutput,
    pub lesson: Lesson,
}

impl ToolSpec {
    pub fn task_for(&self, stance: ReplyStance) -> String {
        self.task.replace("{{stance}}", stance.as_str())
    }

    /// Build the prompt and blueprint for the given learner text
    pub fn assemble(&self, input: &str, stance: ReplyStance) -> AssembledPrompt {
        let task = self.task_for(stance);
        let context = quote_context(self.context_lead, input);
        assemble(self.role, &task, &context, self.format)
    }

    pub fn response_schema(&self) -> Schema {
        (self.schema)()
    }

    pub fn simulated_output(&self, stance: ReplyStance) -> ToolOutput {
        (self.simulated)(stance)
    }
}

impl fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSpec")
            .field("id", &self.id)
            .field("module", &self.module)
            .field("role", &self.role)
            .finish()
    }
}
