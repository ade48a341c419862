use crate::llm::{ChatMessage, Role};

const SYSTEM_PROMPT: &str = "\
You are an experienced code reviewer. You speak plainly and directly, \
you are encouraging, and you enjoy a conversation about code.";

const REVIEW_INSTRUCTIONS: &str = "\
Please review the code below. Point out problems with its logic, its style, \
and anything that could be optimized, and give concrete suggestions. Keep the \
language direct and lead with encouragement:";

/// Build the system prompt that frames the reviewer persona.
///
/// # Examples
///
/// ```
/// use reviewbot_review::prompt::build_system_prompt;
///
/// let prompt = build_system_prompt();
/// assert!(prompt.contains("code reviewer"));
/// ```
pub fn build_system_prompt() -> String {
    SYSTEM_PROMPT.to_string()
}

/// Build the user prompt embedding the code to review.
///
/// # Examples
///
/// ```
/// use reviewbot_review::prompt::build_review_prompt;
///
/// let prompt = build_review_prompt("let x = 1;");
/// assert!(prompt.ends_with("\n\nlet x = 1;"));
/// ```
pub fn build_review_prompt(code: &str) -> String {
    format!("{REVIEW_INSTRUCTIONS}\n\n{code}")
}

/// Build the two-message conversation sent for a review.
pub fn build_messages(code: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: Role::System,
            content: build_system_prompt(),
        },
        ChatMessage {
            role: Role::User,
            content: build_review_prompt(code),
        },
    ]
}
