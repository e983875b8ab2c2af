//! Smart-tool prompt templates: quiz, topic summary, study plan.
//!
//! Each tool wraps a topic string in a fixed template with a structural
//! requirement list and delegates to the shared completion client at a
//! slightly higher determinism floor than open chat.

use edugenie_api::{CompletionClient, CompletionError};
use edugenie_types::{Message, FEATURE_TEMPERATURE};

/// Fixed persona system prompt for every smart tool
pub const PERSONA_PROMPT: &str = "You are EduGenie, an academic AI assistant. \
    Provide well-structured, accurate, student-friendly responses.";

/// The three smart tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Quiz,
    Summary,
    Plan,
}

impl FeatureKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quiz" => Some(Self::Quiz),
            "summary" | "summarize" => Some(Self::Summary),
            "plan" | "study_plan" | "study-plan" => Some(Self::Plan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Summary => "summary",
            Self::Plan => "plan",
        }
    }
}

fn feature_request(kind: FeatureKind, topic: &str) -> String {
    match kind {
        FeatureKind::Quiz => format!(
            "Create a student-friendly quiz on: \"{}\".\n\n\
             Requirements:\n\
             - Exactly 5 multiple-choice questions.\n\
             - Each question must have 4 options (A, B, C, D).\n\
             - Keep difficulty moderate for students.\n\
             - After all questions, add a separate \"Answer Key\" section.\n\
             - The answer key must list only question number and correct option letter.",
            topic
        ),
        FeatureKind::Summary => format!(
            "Summarize this topic for a student audience: \"{}\".\n\n\
             Requirements:\n\
             - Use concise bullet points.\n\
             - Include key concepts and definitions.\n\
             - Add a short \"Why this matters\" section.\n\
             - Keep language simple and exam-oriented.",
            topic
        ),
        FeatureKind::Plan => format!(
            "Create a 7-day study plan for: \"{}\".\n\n\
             Requirements:\n\
             - Provide Day 1 to Day 7 clearly.\n\
             - Include daily goals and suggested practice tasks.\n\
             - Include one revision strategy section for retention.\n\
             - Keep it realistic for students with limited time.",
            topic
        ),
    }
}

/// Build the two-message prompt for a smart tool: the fixed persona system
/// message followed by the templated user request embedding the topic.
pub fn build_feature_prompt(kind: FeatureKind, topic: &str) -> Vec<Message> {
    vec![
        Message::system(PERSONA_PROMPT),
        Message::user(feature_request(kind, topic)),
    ]
}

/// Run a smart tool through the shared completion client at the feature
/// temperature (0.3).
pub async fn run_feature(
    client: &CompletionClient,
    model: &str,
    kind: FeatureKind,
    topic: &str,
) -> Result<String, CompletionError> {
    let messages = build_feature_prompt(kind, topic);
    client.complete(model, &messages, FEATURE_TEMPERATURE).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use edugenie_types::Role;

    #[test]
    fn test_quiz_prompt_shape() {
        let messages = build_feature_prompt(FeatureKind::Quiz, "Photosynthesis");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, PERSONA_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("Photosynthesis"));
        assert!(messages[1]
            .content
            .contains("Exactly 5 multiple-choice questions"));
    }

    #[test]
    fn test_summary_prompt_has_why_it_matters() {
        let messages = build_feature_prompt(FeatureKind::Summary, "Osmosis");
        assert!(messages[1].content.contains("Osmosis"));
        assert!(messages[1].content.contains("Why this matters"));
    }

    #[test]
    fn test_plan_prompt_has_seven_days_and_revision() {
        let messages = build_feature_prompt(FeatureKind::Plan, "Calculus");
        assert!(messages[1].content.contains("Day 1 to Day 7"));
        assert!(messages[1].content.contains("revision strategy"));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(FeatureKind::from_str("quiz"), Some(FeatureKind::Quiz));
        assert_eq!(FeatureKind::from_str("study_plan"), Some(FeatureKind::Plan));
        assert_eq!(
            FeatureKind::from_str("Summarize"),
            Some(FeatureKind::Summary)
        );
        assert_eq!(FeatureKind::from_str("flashcards"), None);
    }
}
