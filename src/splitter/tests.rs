use super::*;

fn default_limits() -> SplitLimits {
    SplitLimits::default()
}

#[test]
fn test_short_text_single_unnumbered_segment() {
    let result = split_into_thread("Short tweet.", &default_limits());

    assert_eq!(result.segment_count, 1);
    assert_eq!(result.segments[0].text, "Short tweet.");
    assert_eq!(result.segments[0].position, 1);
    assert_eq!(result.segments[0].total_segments, 1);
    assert_eq!(result.segments[0].effective_length, 12);
    assert!(result.segments[0].is_within_limit);
    assert!(result.warnings.is_empty());
    assert_eq!(result.original_length, 12);
}

#[test]
fn test_empty_input_yields_warning() {
    let result = split_into_thread("", &default_limits());

    assert_eq!(result.segment_count, 0);
    assert!(result.segments.is_empty());
    assert_eq!(result.original_length, 0);
    assert_eq!(result.warnings, vec!["No text provided".to_string()]);
}

#[test]
fn test_whitespace_only_input_yields_warning() {
    let result = split_into_thread("   \n\t  ", &default_limits());

    assert_eq!(result.segment_count, 0);
    assert_eq!(result.original_length, 0);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_input_is_trimmed() {
    let result = split_into_thread("  Short tweet.  ", &default_limits());

    assert_eq!(result.segments[0].text, "Short tweet.");
    assert_eq!(result.original_length, 12);
}

#[test]
fn test_paragraphs_split_at_paragraph_breaks() {
    // Two 135-char paragraphs fit one 274-char working budget; the third
    // goes to a second segment.
    let para = "a".repeat(135);
    let text = format!("{}\n\n{}\n\n{}", para, para, para);

    let result = split_into_thread(&text, &default_limits());

    assert_eq!(result.segment_count, 2);
    assert!(result.segments[0].text.ends_with(" 1/2"));
    assert!(result.segments[1].text.ends_with(" 2/2"));
    assert!(result.segments.iter().all(|s| s.is_within_limit));
    assert!(result.warnings.is_empty());

    // First segment keeps the interior paragraph break, second is the
    // final paragraph
    assert!(result.segments[0].text.contains("\n\n"));
    assert!(result.segments[1].text.starts_with(&para));
}

#[test]
fn test_run_on_text_hard_cuts_within_budget() {
    // 3000 chars with no break points at all: the hard-cut fallback is
    // exercised on every segment and still respects the budget.
    let text = "x".repeat(3000);

    let result = split_into_thread(&text, &default_limits());

    assert_eq!(result.segment_count, 11);
    assert!(result.segments.iter().all(|s| s.is_within_limit));

    // 11 segments is past the warn threshold; no over-limit warning
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("11 segments"));
}

#[test]
fn test_numbering_is_monotonic() {
    let text = "word ".repeat(200);

    let result = split_into_thread(&text, &default_limits());

    assert!(result.segment_count > 1);
    assert_eq!(result.segment_count, result.segments.len());
    for (i, segment) in result.segments.iter().enumerate() {
        assert_eq!(segment.position, i + 1);
        assert_eq!(segment.total_segments, result.segments.len());
        assert!(segment.text.ends_with(&format!(" {}/{}", i + 1, result.segments.len())));
    }
}

#[test]
fn test_url_survives_splitting_intact() {
    let url = "https://example.com/abcdef";
    let text = format!("ab {} {}", url, "y".repeat(60));
    let limits = SplitLimits {
        per_segment_limit: 40,
        numbering_reserve: 6,
        warn_threshold: 10,
    };

    let result = split_into_thread(&text, &limits);

    let carriers: Vec<_> = result
        .segments
        .iter()
        .filter(|s| s.text.contains("https://"))
        .collect();
    assert_eq!(carriers.len(), 1);
    assert!(carriers[0].text.contains(url));
}

#[test]
fn test_reconstruction_preserves_every_word() {
    let text = "The first paragraph talks about splitting.\n\nThe second paragraph, \
                which is a bit longer, talks about numbering and budgets! And the \
                third asks: does every word survive? It should, because breaks only \
                consume whitespace between words. "
        .repeat(3);

    let result = split_into_thread(&text, &default_limits());

    let original: Vec<&str> = text.split_whitespace().collect();
    let rebuilt: Vec<String> = result
        .segments
        .iter()
        .flat_map(|s| {
            strip_numbering(&s.text)
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    assert_eq!(rebuilt, original);
}

#[test]
fn test_over_limit_warning_on_url_inflation() {
    // Twelve short URLs fit the raw-character window but not the
    // effective budget, so the remainder is emitted whole and over cap.
    let text = vec!["http://a.io"; 12].join(" ");
    assert_eq!(effective_length(&text), 12 * URL_FIXED_LENGTH + 11);

    let result = split_into_thread(&text, &default_limits());

    assert_eq!(result.segment_count, 1);
    assert!(!result.segments[0].is_within_limit);
    // A single segment reached through the second pass carries no suffix
    assert!(!result.segments[0].text.ends_with(" 1/1"));
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("exceed the 280 character limit"));
}

#[test]
fn test_emoji_text_splits_on_char_boundaries() {
    let text = "🚀".repeat(600);

    let result = split_into_thread(&text, &default_limits());

    assert!(result.segment_count > 1);
    for segment in &result.segments {
        assert!(segment.is_within_limit);
        assert!(segment.text.chars().count() <= 280);
    }
}

#[test]
fn test_strip_numbering() {
    assert_eq!(strip_numbering("hello 1/2"), "hello");
    assert_eq!(strip_numbering("margin 10/12"), "margin");
    assert_eq!(strip_numbering("no suffix here"), "no suffix here");
    // Only a trailing suffix is stripped
    assert_eq!(strip_numbering("ratio 1/2 stays"), "ratio 1/2 stays");
    assert_eq!(strip_numbering(""), "");
}

#[test]
fn test_limits_validation() {
    assert!(SplitLimits::default().validate().is_ok());

    let zero = SplitLimits {
        per_segment_limit: 0,
        numbering_reserve: 0,
        warn_threshold: 10,
    };
    assert!(matches!(zero.validate(), Err(LimitsError::ZeroLimit)));

    let crushed = SplitLimits {
        per_segment_limit: 5,
        numbering_reserve: 6,
        warn_threshold: 10,
    };
    assert!(matches!(
        crushed.validate(),
        Err(LimitsError::ReserveTooLarge { .. })
    ));
}

#[test]
fn test_result_serializes_with_contract_field_names() {
    let result = split_into_thread("word ".repeat(100).as_str(), &default_limits());
    let json = serde_json::to_value(&result).expect("serializable");

    assert!(json.get("segments").is_some());
    assert!(json.get("segmentCount").is_some());
    assert!(json.get("originalLength").is_some());
    assert!(json.get("warnings").is_some());

    let first = &json["segments"][0];
    assert!(first.get("text").is_some());
    assert!(first.get("position").is_some());
    assert!(first.get("totalSegments").is_some());
    assert!(first.get("effectiveLength").is_some());
    assert!(first.get("isWithinLimit").is_some());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_every_word_survives(words in proptest::collection::vec("[a-z]{1,12}", 1..150)) {
            let text = words.join(" ");
            let result = split_into_thread(&text, &SplitLimits::default());

            let rebuilt: Vec<String> = result
                .segments
                .iter()
                .flat_map(|s| {
                    strip_numbering(&s.text)
                        .split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect();

            prop_assert_eq!(rebuilt, words);
        }

        #[test]
        fn prop_word_text_stays_within_limit(words in proptest::collection::vec("[a-z]{1,12}", 1..150)) {
            let text = words.join(" ");
            let result = split_into_thread(&text, &SplitLimits::default());

            for segment in &result.segments {
                prop_assert!(segment.is_within_limit);
                prop_assert!(segment.effective_length <= 280);
            }
        }

        #[test]
        fn prop_numbering_is_consistent(words in proptest::collection::vec("[a-z]{1,12}", 1..150)) {
            let text = words.join(" ");
            let result = split_into_thread(&text, &SplitLimits::default());

            prop_assert_eq!(result.segment_count, result.segments.len());
            for (i, segment) in result.segments.iter().enumerate() {
                prop_assert_eq!(segment.position, i + 1);
                prop_assert_eq!(segment.total_segments, result.segments.len());
            }
        }

        #[test]
        fn prop_total_over_arbitrary_input(text in "[a-zA-Z0-9 \n.,:;!?#@/-]{0,400}") {
            // Never panics, always a structurally valid result
            let result = split_into_thread(&text, &SplitLimits::default());

            prop_assert_eq!(result.segment_count, result.segments.len());
            for segment in &result.segments {
                prop_assert!(!segment.text.is_empty());
            }
        }
    }
}
