#[cfg(test)]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Hard cap on Instagram caption length
pub const CAPTION_MAX_CHARS: usize = 2200;

/// Engagement research puts the sweet spot at 125-150 characters
pub const CAPTION_OPTIMAL_MIN: usize = 125;
pub const CAPTION_OPTIMAL_MAX: usize = 150;

/// Hashtag counts: optimal ceiling and the platform maximum
pub const HASHTAG_OPTIMAL: usize = 5;
pub const HASHTAG_MAX: usize = 30;

/// Raw character cap for a single standalone tweet
pub const TWEET_MAX_CHARS: usize = 280;

static HASHTAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").expect("valid hashtag regex"));
static MENTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[A-Za-z0-9_]+").expect("valid mention regex"));

/// Traffic-light status for a validated quantity.
///
/// Variant order matters: combining two statuses takes the worse one via
/// `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Warning,
    Error,
}

/// Classify a value against upper-bound thresholds
pub fn status_for(value: usize, warning_threshold: usize, error_threshold: usize) -> ValidationStatus {
    if value > error_threshold {
        ValidationStatus::Error
    } else if value > warning_threshold {
        ValidationStatus::Warning
    } else {
        ValidationStatus::Valid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Optimal,
    Good,
    Long,
}

/// Length-based engagement assessment for a caption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionEngagement {
    pub level: EngagementLevel,
    pub label: String,
    pub tip: String,
}

/// Caption-side results of an Instagram validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionCheck {
    pub char_count: usize,
    pub max_chars: usize,
    pub is_valid: bool,
    pub status: ValidationStatus,
    pub engagement: CaptionEngagement,
}

/// Hashtag-side results of an Instagram validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagCheck {
    pub count: usize,
    pub optimal: usize,
    pub status: ValidationStatus,
    pub tags: Vec<String>,
}

/// Full validation record for an Instagram caption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramValidation {
    pub caption: CaptionCheck,
    pub hashtags: HashtagCheck,
    pub mentions: Vec<String>,
    pub overall_status: ValidationStatus,
}

/// Raw character check for one standalone tweet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetValidation {
    pub char_count: usize,
    pub max_chars: usize,
    pub is_valid: bool,
    /// Characters left under the cap; negative when over
    pub remaining: i64,
}

/// Extract #hashtags from text, Unicode word characters included
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract @mentions from text
pub fn extract_mentions(text: &str) -> Vec<String> {
    MENTION_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Engagement tier for a caption of `char_count` characters
pub fn caption_engagement(char_count: usize) -> CaptionEngagement {
    if char_count <= CAPTION_OPTIMAL_MAX {
        CaptionEngagement {
            level: EngagementLevel::Optimal,
            label: "Optimal length".to_string(),
            tip: "Short captions (under 150 chars) get the best engagement".to_string(),
        }
    } else if char_count <= 300 {
        CaptionEngagement {
            level: EngagementLevel::Good,
            label: "Good length".to_string(),
            tip: "Your caption is a good length for engagement".to_string(),
        }
    } else {
        CaptionEngagement {
            level: EngagementLevel::Long,
            label: "Long caption".to_string(),
            tip: "Consider shortening for better engagement, or use line breaks".to_string(),
        }
    }
}

/// Validate an Instagram caption: length, hashtag count, mentions.
pub fn validate_instagram_caption(caption: &str) -> InstagramValidation {
    let char_count = caption.chars().count();
    let hashtags = extract_hashtags(caption);
    let mentions = extract_mentions(caption);

    // Warn from 90% of the cap
    let caption_status = status_for(char_count, CAPTION_MAX_CHARS * 9 / 10, CAPTION_MAX_CHARS);
    let hashtag_status = status_for(hashtags.len(), HASHTAG_OPTIMAL, HASHTAG_MAX);
    let overall_status = caption_status.max(hashtag_status);

    InstagramValidation {
        caption: CaptionCheck {
            char_count,
            max_chars: CAPTION_MAX_CHARS,
            is_valid: char_count <= CAPTION_MAX_CHARS,
            status: caption_status,
            engagement: caption_engagement(char_count),
        },
        hashtags: HashtagCheck {
            count: hashtags.len(),
            optimal: HASHTAG_OPTIMAL,
            status: hashtag_status,
            tags: hashtags,
        },
        mentions,
        overall_status,
    }
}

/// Validate a single standalone tweet against the raw character cap
pub fn validate_tweet(text: &str) -> TweetValidation {
    let char_count = text.chars().count();
    TweetValidation {
        char_count,
        max_chars: TWEET_MAX_CHARS,
        is_valid: char_count <= TWEET_MAX_CHARS,
        remaining: TWEET_MAX_CHARS as i64 - char_count as i64,
    }
}
