use prompt_lab::prompt_engine::results::ToolOutput;
use prompt_lab::{EngineMode, LabConfig, PromptLab, ReplyStance, ToolId, ToolRequest};

#[tokio::test]
async fn meeting_returns_fixed_example() {
    let lab = PromptLab::new(&LabConfig::default()).unwrap();
    assert_eq!(lab.mode(), EngineMode::Simulated);

    let result = lab
        .schedule_meeting("Could we find time next week?")
        .await
        .unwrap();

    let flat = serde_json::to_value(&result).unwrap();
    assert_eq!(flat["proposedSlots"], serde_json::json!(["Tuesday 3pm"]));
    assert_eq!(flat["confirmationMessage"], "See you Tuesday.");
    assert_eq!(result.blueprint.role, "Professional Scheduler");
}

#[tokio::test]
async fn tone_scores_ignore_input() {
    let lab = PromptLab::simulated();
    for text in ["hi", "Per my last email, this is unacceptable."] {
        match lab.analyze_tone(text).await.unwrap().output {
            ToolOutput::ToneAnalysis(t) => {
                assert_eq!(t.warmth, 60.0);
                assert_eq!(t.professionalism, 85.0);
            }
            other => panic!("unexpected output: {:?}", other),
        }
    }
}

#[tokio::test]
async fn every_tool_is_deterministic() {
    let lab = PromptLab::simulated();
    for tool in ToolId::ALL {
        let request = ToolRequest::new(tool, "Quarterly numbers are late again.");
        let first = lab.run(&request).await.unwrap();
        let second = lab.run(&request).await.unwrap();
        assert_eq!(first, second, "{} is not deterministic", tool);
        assert_eq!(first.blueprint.role, tool.spec().role);
    }
}

#[tokio::test]
async fn simulated_reply_mentions_stance() {
    let lab = PromptLab::simulated();
    let result = lab
        .reply_wizard("Can you ship Friday?", ReplyStance::Negotiate)
        .await
        .unwrap();
    match result.output {
        ToolOutput::ReplyWizard(r) => assert!(r.reply.contains("Negotiate")),
        other => panic!("unexpected output: {:?}", other),
    }
}

#[tokio::test]
async fn blueprint_keeps_rtcf_order() {
    let lab = PromptLab::simulated();
    let result = lab.check_clarity("Let's circle back and synergize.").await.unwrap();
    let template = &result.blueprint.full_prompt_template;

    let role = template.find("Role: Plain Language Editor").unwrap();
    let task = template.find("Task: ").unwrap();
    let context = template.find("Context: Text: \"Let's circle back and synergize.\"").unwrap();
    let format = template.find("Format: ").unwrap();
    assert!(role < task && task < context && context < format);
}
