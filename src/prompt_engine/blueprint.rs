// prompt_engine/blueprint.rs - RTCF prompt assembly (Role, Task, Context, Format)

use super::types::{AssembledPrompt, PromptBlueprint};

/// Concatenate the four RTCF parts into the prompt text and its blueprint.
///
/// Never fails: every input, including an empty one, is used verbatim.
pub fn assemble(role: &str, task: &str, context: &str, format: &str) -> AssembledPrompt {
    let prompt_text = format!("{}. {}. {}. Format: {}", role, task, context, format);

    AssembledPrompt {
        prompt_text,
        blueprint: PromptBlueprint {
            role: role.to_string(),
            task: task.to_string(),
            context: context.to_string(),
            format: format.to_string(),
            full_prompt_template: full_template(role, task, context, format),
        },
    }
}

/// Quote raw learner text behind a lead such as `Thread:`
pub fn quote_context(lead: &str, input: &str) -> String {
    format!("{} \"{}\"", lead, input)
}

fn full_template(role: &str, task: &str, context: &str, format: &str) -> String {
    format!(
        "Role: {}\nTask: {}\nContext: {}\nFormat: {}",
        role, task, context, format
    )
}
