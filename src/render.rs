// render.rs - Plain-text views for the terminal front end

use std::fmt::Write;

use crate::catalog::{LabModule, ToolId};
use crate::config::LabConfig;
use crate::prompt_engine::results::ToolOutput;
use crate::prompt_engine::{EngineMode, LabResult, PromptBlueprint};
use crate::session::{ModuleSession, ViewMode};

pub fn status(mode: EngineMode, config: &LabConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Mode:    {}", mode.label());
    let _ = writeln!(out, "Model:   {}", config.model);
    let _ = writeln!(out, "Timeout: {}s", config.timeout.as_secs());
    match config.api_key_masked() {
        Some(masked) => {
            let _ = writeln!(out, "API key: {}", masked);
        }
        None => {
            let _ = writeln!(out, "API key: not set (set API_KEY to go live)");
        }
    }
    out
}

/// Workshop overview: every module with its three tools
pub fn overview() -> String {
    let mut out = String::from("📊 Workshop Overview\n\n");
    for module in LabModule::ALL {
        let _ = writeln!(out, "{} Module {}", module.icon(), module.title());
        let _ = writeln!(out, "   {}", module.summary());
        for tool in module.tools() {
            let spec = tool.spec();
            let _ = writeln!(out, "   {} {:<11} {}", spec.icon, tool.id(), spec.label);
        }
        out.push('\n');
    }
    out
}

pub fn theory(tool: ToolId) -> String {
    let spec = tool.spec();
    let lesson = &spec.lesson;
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", spec.icon, lesson.title);
    let _ = writeln!(out, "Role: {}", lesson.role_description);
    let _ = writeln!(out, "\n{}\n", lesson.lesson);

    let _ = writeln!(out, "Task anatomy");
    let _ = writeln!(out, "  Verb:         {}", lesson.anatomy.verb);
    let _ = writeln!(out, "  Instruction:  {}", lesson.anatomy.instruction);
    let _ = writeln!(out, "  Constraints:  {}", lesson.anatomy.constraints);
    let _ = writeln!(out, "  Why it works: {}", lesson.anatomy.why_it_works);

    let _ = writeln!(out, "\nExample prompts");
    for (i, prompt) in lesson.example_prompts.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, prompt);
    }

    let _ = writeln!(out, "\nWorkplace benefit: {}", lesson.workplace_benefit);
    let _ = writeln!(out, "Tip: {}", lesson.tip);
    let _ = writeln!(out, "Strategy: {}", lesson.strategy);
    out
}

pub fn blueprint(blueprint: &PromptBlueprint) -> String {
    let mut out = String::from("Prompt blueprint\n");
    let _ = writeln!(out, "  R  {}", blueprint.role);
    let _ = writeln!(out, "  T  {}", blueprint.task);
    let _ = writeln!(out, "  C  {}", blueprint.context);
    let _ = writeln!(out, "  F  {}", blueprint.format);
    let _ = writeln!(out, "\n{}", blueprint.full_prompt_template);
    out
}

fn bullets(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out, "{}:", heading);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

pub fn output(output: &ToolOutput) -> String {
    let mut out = String::new();
    match output {
        ToolOutput::ReplyWizard(r) => {
            let _ = writeln!(out, "{}", r.reply);
        }
        ToolOutput::SubjectLines(r) => bullets(&mut out, "Subject lines", &r.suggestions),
        ToolOutput::Summarizer(r) => {
            let _ = writeln!(out, "TL;DR: {}", r.summary);
            let _ = writeln!(out, "Action item: {}", r.action_item);
        }
        ToolOutput::ToneAnalysis(r) => {
            let _ = writeln!(out, "Warmth:          {}/100", r.warmth);
            let _ = writeln!(out, "Professionalism: {}/100", r.professionalism);
            let _ = writeln!(out, "Improve: {}", r.improvement);
        }
        ToolOutput::EmpathyRewrite(r) => {
            let _ = writeln!(out, "{}", r.output);
        }
        ToolOutput::ClarityCheck(r) => {
            let _ = writeln!(out, "Readability: {}", r.readability_score);
            for swap in &r.jargon_found {
                let _ = writeln!(out, "  {} -> {}", swap.original, swap.simpler);
            }
        }
        ToolOutput::CrisisShield(r) => {
            bullets(&mut out, "Psychological insights", &r.psychological_insights);
            let _ = writeln!(out, "Draft:\n{}", r.response_draft);
        }
        ToolOutput::Escalation(r) => {
            let _ = writeln!(out, "Risk level: {}", r.risk_level);
            bullets(&mut out, "Triggers", &r.triggers);
            let _ = writeln!(out, "Advice: {}", r.advice);
        }
        ToolOutput::RootCause(r) => {
            bullets(&mut out, "Causes", &r.causes);
            let _ = writeln!(out, "Structural fix: {}", r.structural_fix);
        }
        ToolOutput::Meeting(r) => {
            bullets(&mut out, "Proposed slots", &r.proposed_slots);
            let _ = writeln!(out, "Confirmation: {}", r.confirmation_message);
        }
        ToolOutput::Tasks(r) => {
            let _ = writeln!(out, "Tasks:");
            for item in &r.tasks {
                let _ = writeln!(out, "  [{}] {}", item.priority, item.task);
            }
        }
        ToolOutput::OutOfOffice(r) => {
            let _ = writeln!(out, "{}", r.message);
        }
    }
    out
}

/// Result followed by the blueprint that produced it
pub fn lab_result(result: &LabResult) -> String {
    format!("{}\n{}", output(&result.output), blueprint(&result.blueprint))
}

/// Shell view of the current module session
pub fn session(session: &ModuleSession) -> String {
    let spec = session.active_tool.spec();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} Module {} > {} {}",
        session.module.icon(),
        session.module.title(),
        spec.icon,
        spec.label
    );

    match session.view_mode {
        ViewMode::Theory => out.push_str(&theory(session.active_tool)),
        ViewMode::Lab => {
            let input = if session.input.is_empty() {
                "(empty)"
            } else {
                session.input.as_str()
            };
            let _ = writeln!(out, "Input: {}", input);
            if session.active_tool.uses_stance() {
                let _ = writeln!(out, "Stance: {}", session.stance);
            }
            if session.loading {
                let _ = writeln!(out, "Running...");
            }
            if let Some(at) = session.last_run_at {
                let _ = writeln!(out, "Last run: {}", at.format("%H:%M:%S UTC"));
            }
            if let Some(error) = &session.last_error {
                let _ = writeln!(out, "Error: {}", error);
            }
            if let Some(result) = &session.result {
                out.push_str(&lab_result(result));
            }
        }
    }
    out
}
