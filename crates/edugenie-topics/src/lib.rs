//! Topic extraction and in-session frequency tracking
//!
//! A lightweight keyword heuristic approximates the subject of each user
//! message; per-session counts back the "weak topics" insight. No external
//! NLP machinery, deterministic output.

mod extract;
mod tracker;

pub use extract::{extract_topic, FALLBACK_TOPIC};
pub use tracker::TopicTracker;
