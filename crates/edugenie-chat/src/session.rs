use edugenie_types::{Message, Role, SEED_GREETING};

/// Append-only conversation history for one user session.
///
/// Every session starts from the same assistant greeting; `reset` truncates
/// back to it. Messages are never edited once appended. The session is an
/// explicit value handed into each core call, not hidden global state.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(SEED_GREETING)],
        }
    }

    /// Full ordered history, seed greeting first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Truncate back to the seed greeting
    pub fn reset(&mut self) {
        self.messages.truncate(1);
    }

    /// Most recent non-empty user message, used as the default smart-tool
    /// topic
    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .filter(|m| m.role == Role::User)
            .map(|m| m.content.trim())
            .find(|content| !content.is_empty())
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the model input for one chat turn: exactly one leading system
/// message (the adaptive instruction) followed by the full session history.
pub fn build_chat_messages(session: &ChatSession, simple_mode: bool) -> Vec<Message> {
    let system_instruction = if simple_mode {
        "Explain concepts in very simple language, using analogies and \
         real-life examples suitable for a 10-year-old."
    } else {
        "Provide clear, student-friendly academic explanations with \
         accurate and structured reasoning."
    };

    let mut messages = Vec::with_capacity(session.messages().len() + 1);
    messages.push(Message::system(system_instruction));
    messages.extend_from_slice(session.messages());
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use edugenie_types::SIMPLE_MODE_MARKER;

    #[test]
    fn test_new_session_has_seed_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].content, SEED_GREETING);
    }

    #[test]
    fn test_reset_restores_seed_greeting_exactly() {
        let mut session = ChatSession::new();
        session.push_user("question");
        session.push_assistant("answer");
        session.reset();
        assert_eq!(session.messages(), ChatSession::new().messages());
    }

    #[test]
    fn test_last_user_message_skips_blank() {
        let mut session = ChatSession::new();
        session.push_user("photosynthesis");
        session.push_assistant("reply");
        session.push_user("   ");
        assert_eq!(session.last_user_message(), Some("photosynthesis"));
    }

    #[test]
    fn test_last_user_message_none_for_fresh_session() {
        assert_eq!(ChatSession::new().last_user_message(), None);
    }

    #[test]
    fn test_build_chat_messages_single_leading_system() {
        let mut session = ChatSession::new();
        session.push_user("hi");
        let messages = build_chat_messages(&session, false);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(
            messages
                .iter()
                .filter(|m| m.role == Role::System)
                .count(),
            1
        );
        assert_eq!(&messages[1..], session.messages());
    }

    #[test]
    fn test_simple_mode_instruction_carries_fallback_marker() {
        let session = ChatSession::new();
        let messages = build_chat_messages(&session, true);
        assert!(messages[0].content.contains(SIMPLE_MODE_MARKER));
        let standard = build_chat_messages(&session, false);
        assert!(!standard[0].content.contains(SIMPLE_MODE_MARKER));
    }
}
