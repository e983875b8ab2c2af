//! Conversation management for edugenie
//!
//! This crate provides the session store, the chat turn pipeline that wires
//! topic tracking into the completion call, and the smart-tool prompt
//! builders.

mod features;
mod session;

pub use features::{build_feature_prompt, run_feature, FeatureKind, PERSONA_PROMPT};
pub use session::{build_chat_messages, ChatSession};

use edugenie_api::{CompletionClient, CompletionError};
use edugenie_topics::{extract_topic, TopicTracker};
use edugenie_types::CHAT_TEMPERATURE;

/// Run one full chat turn: track the topic, append the user message, send
/// the whole history (with the adaptive system instruction prefixed) to the
/// provider, and append the reply.
///
/// On error the user message stays in the session; the caller decides what
/// text, if any, to record as the assistant's side of the failed turn.
pub async fn chat_turn(
    client: &CompletionClient,
    model: &str,
    session: &mut ChatSession,
    tracker: &mut TopicTracker,
    input: &str,
    simple_mode: bool,
) -> Result<String, CompletionError> {
    let topic = extract_topic(input);
    tracker.increment(&topic);

    session.push_user(input);
    let messages = build_chat_messages(session, simple_mode);

    let reply = client.complete(model, &messages, CHAT_TEMPERATURE).await?;
    session.push_assistant(&reply);
    Ok(reply)
}
