use super::*;

#[test]
fn test_extract_hashtags() {
    let tags = extract_hashtags("Launch day! #rustlang #opensource #코딩");
    assert_eq!(tags, vec!["#rustlang", "#opensource", "#코딩"]);
}

#[test]
fn test_extract_hashtags_none() {
    assert!(extract_hashtags("no tags here").is_empty());
}

#[test]
fn test_extract_mentions() {
    let mentions = extract_mentions("Thanks @alice and @bob_dev!");
    assert_eq!(mentions, vec!["@alice", "@bob_dev"]);
}

#[test]
fn test_status_thresholds() {
    assert_eq!(status_for(10, 50, 100), ValidationStatus::Valid);
    assert_eq!(status_for(50, 50, 100), ValidationStatus::Valid);
    assert_eq!(status_for(51, 50, 100), ValidationStatus::Warning);
    assert_eq!(status_for(101, 50, 100), ValidationStatus::Error);
}

#[test]
fn test_status_combines_to_worst() {
    assert_eq!(
        ValidationStatus::Valid.max(ValidationStatus::Warning),
        ValidationStatus::Warning
    );
    assert_eq!(
        ValidationStatus::Warning.max(ValidationStatus::Error),
        ValidationStatus::Error
    );
}

#[test]
fn test_engagement_tiers() {
    assert_eq!(caption_engagement(100).level, EngagementLevel::Optimal);
    assert_eq!(caption_engagement(150).level, EngagementLevel::Optimal);
    assert_eq!(caption_engagement(300).level, EngagementLevel::Good);
    assert_eq!(caption_engagement(301).level, EngagementLevel::Long);
}

#[test]
fn test_caption_within_limits() {
    let validation = validate_instagram_caption("A sunny day at the beach #sun #sand");

    assert!(validation.caption.is_valid);
    assert_eq!(validation.caption.status, ValidationStatus::Valid);
    assert_eq!(validation.hashtags.count, 2);
    assert_eq!(validation.hashtags.status, ValidationStatus::Valid);
    assert_eq!(validation.overall_status, ValidationStatus::Valid);
}

#[test]
fn test_caption_warning_near_cap() {
    // Past 90% of 2200 but under the cap
    let caption = "x".repeat(2000);
    let validation = validate_instagram_caption(&caption);

    assert!(validation.caption.is_valid);
    assert_eq!(validation.caption.status, ValidationStatus::Warning);
    assert_eq!(validation.overall_status, ValidationStatus::Warning);
}

#[test]
fn test_caption_over_cap_is_error() {
    let caption = "x".repeat(2201);
    let validation = validate_instagram_caption(&caption);

    assert!(!validation.caption.is_valid);
    assert_eq!(validation.caption.status, ValidationStatus::Error);
    assert_eq!(validation.overall_status, ValidationStatus::Error);
}

#[test]
fn test_too_many_hashtags() {
    let six = "pic #a #b #c #d #e #f";
    assert_eq!(
        validate_instagram_caption(six).hashtags.status,
        ValidationStatus::Warning
    );

    let tags: Vec<String> = (0..31).map(|i| format!("#tag{}", i)).collect();
    let over_max = format!("pic {}", tags.join(" "));
    let validation = validate_instagram_caption(&over_max);
    assert_eq!(validation.hashtags.status, ValidationStatus::Error);
    assert_eq!(validation.overall_status, ValidationStatus::Error);
}

#[test]
fn test_validate_tweet_counts_remaining() {
    let ok = validate_tweet("short");
    assert!(ok.is_valid);
    assert_eq!(ok.remaining, 275);

    let over = validate_tweet(&"y".repeat(300));
    assert!(!over.is_valid);
    assert_eq!(over.remaining, -20);
}

#[test]
fn test_validate_tweet_counts_chars_not_bytes() {
    let emoji = validate_tweet(&"🚀".repeat(280));
    assert!(emoji.is_valid);
    assert_eq!(emoji.remaining, 0);
}
