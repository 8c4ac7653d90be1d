// prompt_engine/results.rs - Structured result shapes, one per tool

use serde::{Deserialize, Serialize};
use std::fmt;

// --- Module 1: Drafting ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyWizardResult {
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectLineResult {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizerResult {
    pub summary: String,
    pub action_item: String,
}

// --- Module 2: Tone ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneAnalysis {
    pub warmth: f64,
    pub professionalism: f64,
    pub improvement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResult {
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JargonSwap {
    pub original: String,
    pub simpler: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClarityResult {
    pub jargon_found: Vec<JargonSwap>,
    pub readability_score: f64,
}

// --- Module 3: Crisis ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisAnalysis {
    pub psychological_insights: Vec<String>,
    pub response_draft: String,
}

/// Three-step scale shared by escalation risk and task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[serde(alias = "low", alias = "LOW")]
    Low,
    #[serde(alias = "Med", alias = "med", alias = "medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "high", alias = "HIGH")]
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationResult {
    pub risk_level: Level,
    pub triggers: Vec<String>,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootCauseResult {
    pub causes: Vec<String>,
    pub structural_fix: String,
}

// --- Module 4: Admin ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingExtraction {
    pub proposed_slots: Vec<String>,
    pub confirmation_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub task: String,
    pub priority: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskExtraction {
    pub tasks: Vec<TaskItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfOfficeResult {
    pub message: String,
}

/// Result of any tool; serializes as the bare result object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    ReplyWizard(ReplyWizardResult),
    SubjectLines(SubjectLineResult),
    Summarizer(SummarizerResult),
    ToneAnalysis(ToneAnalysis),
    EmpathyRewrite(RewriteResult),
    ClarityCheck(ClarityResult),
    CrisisShield(CrisisAnalysis),
    Escalation(EscalationResult),
    RootCause(RootCauseResult),
    Meeting(MeetingExtraction),
    Tasks(TaskExtraction),
    OutOfOffice(OutOfOfficeResult),
}
