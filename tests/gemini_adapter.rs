use mockito::Matcher;
use prompt_lab::prompt_engine::llm::GeminiAdapter;
use prompt_lab::prompt_engine::results::{Level, ToolOutput};
use prompt_lab::prompt_engine::LLMError;
use prompt_lab::{EngineError, EngineMode, LabConfig, PromptLab, ReplyStance};
use serde_json::json;
use std::io::Write;
use std::time::{Duration, Instant};

const GENERATE_PATH: &str = "/v1beta/models/test-model:generateContent";

fn config_for(server: &mockito::ServerGuard) -> LabConfig {
    LabConfig {
        api_key: Some("test-key".to_string()),
        api_base: server.url(),
        model: "test-model".to_string(),
        ..LabConfig::default()
    }
}

fn lab_with(config: &LabConfig) -> PromptLab {
    let adapter = GeminiAdapter::new("test-key".to_string(), config).unwrap();
    PromptLab::with_adapter(Box::new(adapter))
}

fn lab_for(server: &mockito::ServerGuard) -> PromptLab {
    lab_with(&config_for(server))
}

fn candidate_body(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
    .to_string()
}

#[tokio::test]
async fn structured_request_returns_parsed_result_with_blueprint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "contents": [{ "parts": [{
                "text": "Professional Scheduler. Extract proposed slots and write a summary.. \
                         Thread: \"Wed 10am or Thu 2pm?\". \
                         Format: JSON with 'proposedSlots' and 'confirmationMessage'."
            }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "required": ["proposedSlots", "confirmationMessage"]
                }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body(
            r#"{"proposedSlots": ["Wed 10am", "Thu 2pm"], "confirmationMessage": "Wednesday it is."}"#,
        ))
        .expect(1)
        .create_async()
        .await;

    let lab = lab_for(&server);
    assert_eq!(lab.mode(), EngineMode::Live);

    let result = lab.schedule_meeting("Wed 10am or Thu 2pm?").await.unwrap();
    mock.assert_async().await;

    match &result.output {
        ToolOutput::Meeting(m) => {
            assert_eq!(m.proposed_slots, vec!["Wed 10am", "Thu 2pm"]);
            assert_eq!(m.confirmation_message, "Wednesday it is.");
        }
        other => panic!("unexpected output: {:?}", other),
    }
    assert_eq!(result.blueprint.role, "Professional Scheduler");

    let flat = serde_json::to_value(&result).unwrap();
    assert_eq!(flat["confirmationMessage"], "Wednesday it is.");
    assert_eq!(flat["blueprint"]["role"], "Professional Scheduler");
}

#[tokio::test]
async fn fenced_json_and_level_abbreviations_are_accepted() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(candidate_body(
            "```json\n{\"riskLevel\": \"Med\", \"triggers\": [\"unacceptable\"], \"advice\": \"Call them.\"}\n```",
        ))
        .create_async()
        .await;

    let result = lab_for(&server)
        .detect_escalation("This is unacceptable.")
        .await
        .unwrap();

    match result.output {
        ToolOutput::Escalation(e) => assert_eq!(e.risk_level, Level::Medium),
        other => panic!("unexpected output: {:?}", other),
    }
}

#[tokio::test]
async fn reply_stance_reaches_the_prompt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_body(Matcher::Regex("stance of: Decline".to_string()))
        .with_status(200)
        .with_body(candidate_body(r#"{"reply": "Unfortunately not this week."}"#))
        .expect(1)
        .create_async()
        .await;

    let result = lab_for(&server)
        .reply_wizard("Can you ship Friday?", ReplyStance::Decline)
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(
        result.blueprint.task,
        "Draft a concise email reply with a stance of: Decline."
    );
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", GENERATE_PATH)
        .with_status(401)
        .create_async()
        .await;

    let err = lab_for(&server).summarize("thread").await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Generation(LLMError::AuthenticationError)
    ));
}

#[tokio::test]
async fn forbidden_maps_to_authentication_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", GENERATE_PATH)
        .with_status(403)
        .with_body("API key not valid")
        .create_async()
        .await;

    let err = lab_for(&server).check_clarity("synergy").await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Generation(LLMError::AuthenticationError)
    ));
}

#[tokio::test]
async fn slow_endpoint_hits_configured_timeout() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_secs(3));
            w.write_all(candidate_body(r#"{"reply": "too late"}"#).as_bytes())
        })
        .create_async()
        .await;

    let config = LabConfig {
        timeout: Duration::from_millis(300),
        ..config_for(&server)
    };

    let started = Instant::now();
    let err = lab_with(&config)
        .reply_wizard("Can you ship Friday?", ReplyStance::Agree)
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Generation(LLMError::Timeout)));
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", GENERATE_PATH)
        .with_status(429)
        .create_async()
        .await;

    let err = lab_for(&server).subject_lines("body").await.unwrap_err();
    assert!(matches!(err, EngineError::Generation(LLMError::RateLimitError)));
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", GENERATE_PATH)
        .with_status(500)
        .with_body("backend exploded")
        .create_async()
        .await;

    let err = lab_for(&server).root_cause("complaint").await.unwrap_err();
    match err {
        EngineError::Generation(LLMError::ProviderError(msg)) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("backend exploded"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn schema_mismatch_is_malformed_response() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(candidate_body(r#"{"summary": "no action item here"}"#))
        .create_async()
        .await;

    let err = lab_for(&server).summarize("thread").await.unwrap_err();
    assert!(matches!(err, EngineError::MalformedResponse { .. }));
}

#[tokio::test]
async fn empty_candidates_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let err = lab_for(&server).extract_tasks("thread").await.unwrap_err();
    assert!(matches!(err, EngineError::Generation(LLMError::InvalidResponse)));
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let config = LabConfig {
        api_key: Some("test-key".to_string()),
        api_base: "http://127.0.0.1:9".to_string(),
        ..LabConfig::default()
    };
    let lab = PromptLab::new(&config).unwrap();

    let err = lab.craft_out_of_office("away").await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Generation(LLMError::NetworkError(_)) | EngineError::Generation(LLMError::Timeout)
    ));
}
