/// Sentinel returned when a message yields no usable tokens
pub const FALLBACK_TOPIC: &str = "general";

/// Small stopword set to keep extraction lightweight
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "can", "do", "for", "from", "how", "i", "in",
    "is", "it", "me", "my", "of", "on", "or", "please", "should", "tell", "that", "the", "this",
    "to", "what", "when", "where", "which", "why", "with", "you",
];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Extract one short topic keyword from a user message.
///
/// Lowercases the input, strips everything outside `[a-z0-9 ]`, then scores
/// surviving tokens by in-message frequency with token length as tie-break.
/// The first-occurring token wins any remaining tie. Always returns a
/// non-empty token; messages with no usable tokens map to `"general"`.
pub fn extract_topic(user_message: &str) -> String {
    let cleaned: String = user_message
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let tokens: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|token| {
            !is_stopword(token) && token.len() > 2 && !token.chars().all(|c| c.is_ascii_digit())
        })
        .collect();

    if tokens.is_empty() {
        return FALLBACK_TOPIC.to_string();
    }

    // Count in first-occurrence order so ties resolve to the earliest token.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for &token in &tokens {
        match counts.iter_mut().find(|(t, _)| *t == token) {
            Some((_, count)) => *count += 1,
            None => counts.push((token, 1)),
        }
    }

    let mut best = counts[0];
    for candidate in counts.iter().skip(1) {
        if (candidate.1, candidate.0.len()) > (best.1, best.0.len()) {
            best = *candidate;
        }
    }
    best.0.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_sorted_for_binary_search() {
        let mut sorted = STOPWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOPWORDS);
    }

    #[test]
    fn test_basic_extraction() {
        assert_eq!(extract_topic("Tell me about photosynthesis"), "photosynthesis");
    }

    #[test]
    fn test_frequency_wins_over_length() {
        assert_eq!(
            extract_topic("algebra algebra trigonometry"),
            "algebra"
        );
    }

    #[test]
    fn test_length_breaks_frequency_tie() {
        assert_eq!(extract_topic("ions chemistry"), "chemistry");
    }

    #[test]
    fn test_first_occurrence_breaks_full_tie() {
        // "krebs" and "cycle" both appear once with equal length
        assert_eq!(extract_topic("What is the Krebs cycle?"), "krebs");
    }

    #[test]
    fn test_punctuation_and_case_folding() {
        assert_eq!(extract_topic("PHYSICS!!! physics?"), "physics");
    }

    #[test]
    fn test_numeric_and_short_tokens_dropped() {
        assert_eq!(extract_topic("42 ax 1000"), FALLBACK_TOPIC);
    }

    #[test]
    fn test_stopword_only_message() {
        assert_eq!(extract_topic("what is the"), FALLBACK_TOPIC);
    }

    #[test]
    fn test_empty_and_whitespace_never_panic() {
        assert_eq!(extract_topic(""), FALLBACK_TOPIC);
        assert_eq!(extract_topic("   \t\n"), FALLBACK_TOPIC);
    }

    #[test]
    fn test_non_ascii_becomes_separator() {
        // 'é' is replaced by a space, splitting the word
        assert_eq!(extract_topic("géometry"), "ometry");
    }
}
