//! Engagement analysis for a thread's opening segment.

use serde::{Deserialize, Serialize};

/// Opening words that tend to make a weak hook
const WEAK_OPENERS: &[&str] = &["i", "the", "a", "an", "this", "that", "it", "my"];

/// Signals detected in the first segment of a thread
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookAnalysis {
    pub has_question: bool,
    pub has_number: bool,
    pub has_emoji: bool,
    pub starts_strong: bool,
    /// Summary of the detected strengths, or a generic suggestion
    pub feedback: String,
}

/// Classify the opening segment for hook quality.
///
/// A strong opening avoids the common weak starter words; the check is
/// case-insensitive against the whole leading word.
pub fn analyze_hook(first_segment: &str) -> HookAnalysis {
    let has_question = first_segment.contains('?');
    let has_number = first_segment.chars().any(|c| c.is_ascii_digit());
    let has_emoji = first_segment
        .chars()
        .any(|c| ('\u{1F300}'..='\u{1F9FF}').contains(&c));

    let first_word = first_segment.split_whitespace().next().unwrap_or("");
    let starts_strong = !WEAK_OPENERS
        .iter()
        .any(|weak| first_word.eq_ignore_ascii_case(weak));

    let mut strengths = Vec::new();
    if has_question {
        strengths.push("Asks a question ✓");
    }
    if has_number {
        strengths.push("Includes a number ✓");
    }
    if starts_strong {
        strengths.push("Strong opening ✓");
    }

    let feedback = if strengths.is_empty() {
        "Consider starting with a question or bold statement".to_string()
    } else {
        strengths.join(", ")
    };

    HookAnalysis {
        has_question,
        has_number,
        has_emoji,
        starts_strong,
        feedback,
    }
}
