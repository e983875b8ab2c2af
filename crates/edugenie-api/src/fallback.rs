//! Deterministic offline responses used when the provider cannot serve a
//! live completion. These never fail and never touch the network.

use edugenie_types::{Message, Role, SIMPLE_MODE_MARKER};

/// Build a templated study-tip response from the conversation alone.
///
/// Only two inputs matter: the last non-empty user message (the topic) and
/// whether any system message requested simplified explanations, detected by
/// the `10-year-old` marker phrase.
pub fn local_fallback_response(messages: &[Message]) -> String {
    let mut user_query = "";
    let mut simple_mode = false;

    for message in messages {
        match message.role {
            Role::System => {
                if message.content.contains(SIMPLE_MODE_MARKER) {
                    simple_mode = true;
                }
            }
            Role::User => {
                let trimmed = message.content.trim();
                if !trimmed.is_empty() {
                    user_query = trimmed;
                }
            }
            Role::Assistant => {}
        }
    }

    if user_query.is_empty() {
        user_query = "your topic";
    }

    if simple_mode {
        return format!(
            "The AI service is unavailable right now, so here is a simple way to start.\n\n\
            Topic: **{}**\n\
            - Start with one small step.\n\
            - Think of a real-life example.\n\
            - Write 3 short points you want to remember.\n\
            - Ask yourself 2 questions at the end.\n\n\
            Tip: try again in a little while for a detailed answer.",
            user_query
        );
    }

    format!(
        "The AI service is currently unavailable, so here is a quick fallback study guide.\n\n\
        Topic: **{}**\n\
        1. Define the core concept in 2-3 lines.\n\
        2. List key terms and formulas/points.\n\
        3. Solve one basic and one medium example.\n\
        4. Write a short revision note.\n\n\
        Retry shortly for a full AI-generated response.",
        user_query
    )
}
