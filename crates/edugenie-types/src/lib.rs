//! Core types and structures for edugenie
//!
//! This crate provides the foundational types used across all edugenie crates.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Default model identifier (free tier) used when no override is configured
pub const DEFAULT_MODEL: &str = "openrouter/free";

/// Default chat temperature for open conversation
pub const CHAT_TEMPERATURE: f32 = 0.2;

/// Temperature for smart-tool prompts, which have a required output structure
pub const FEATURE_TEMPERATURE: f32 = 0.3;

/// Seed assistant greeting every session starts with
pub const SEED_GREETING: &str = "Hi! I am EduGenie. Ask me anything about your studies, \
    topics, or exam preparation.";

/// Marker phrase the fallback generator scans system messages for to detect
/// simplified-explanation mode
pub const SIMPLE_MODE_MARKER: &str = "10-year-old";

// ============================================================================
// Message Types
// ============================================================================

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One conversation message. Immutable once appended to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
