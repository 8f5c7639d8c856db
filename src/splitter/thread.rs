use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::breakpoint::find_split_point_preserving_urls;
use super::length::effective_length;
use super::SplitLimits;

/// One tweet-sized segment of a thread
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Segment text, including the " i/N" suffix when the thread has
    /// more than one segment
    pub text: String,
    /// 1-based position within the thread
    pub position: usize,
    /// Segment count of the whole thread (same on every segment)
    pub total_segments: usize,
    /// Length under the URL-aware effective metric
    pub effective_length: usize,
    /// Whether the effective length fits the platform cap
    pub is_within_limit: bool,
}

/// The outcome of splitting one block of text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSplitResult {
    /// Segments in reading order
    pub segments: Vec<Segment>,
    /// Number of segments produced
    pub segment_count: usize,
    /// Character length of the trimmed input
    pub original_length: usize,
    /// Advisory, non-fatal warnings
    pub warnings: Vec<String>,
}

static NUMBERING_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" \d+/\d+$").expect("valid numbering suffix regex"));

/// Split long-form text into a numbered thread.
///
/// Pass 1 splits under a conservative budget that assumes numbering will
/// be needed. If that yields a single segment fitting the full limit, it
/// is returned unnumbered. Otherwise the estimated count fixes the exact
/// suffix width and the text is re-split from scratch under the corrected
/// budget; that second pass is authoritative.
///
/// Total over its input domain: any string resolves to a valid result,
/// warnings are the only failure signal.
pub fn split_into_thread(text: &str, limits: &SplitLimits) -> ThreadSplitResult {
    let clean = text.trim();

    if clean.is_empty() {
        return ThreadSplitResult {
            segments: Vec::new(),
            segment_count: 0,
            original_length: 0,
            warnings: vec!["No text provided".to_string()],
        };
    }

    let original_length = clean.chars().count();
    let mut warnings = Vec::new();

    // First pass: conservative estimate
    let first_budget = limits
        .per_segment_limit
        .saturating_sub(limits.numbering_reserve);
    let estimate = split_into_chunks(clean, first_budget);

    if estimate.len() == 1 {
        let len = effective_length(&estimate[0]);
        if len <= limits.per_segment_limit {
            let segment = Segment {
                text: estimate.into_iter().next().unwrap_or_default(),
                position: 1,
                total_segments: 1,
                effective_length: len,
                is_within_limit: true,
            };
            return ThreadSplitResult {
                segments: vec![segment],
                segment_count: 1,
                original_length,
                warnings,
            };
        }
    }

    // Second pass: re-split with the exact numbering space for the
    // estimated count. The resulting count is authoritative and may
    // differ from the estimate.
    let estimated_total = estimate.len();
    let exact_budget = working_budget(limits.per_segment_limit, estimated_total);
    let chunks = split_into_chunks(clean, exact_budget);
    let total = chunks.len();

    log::debug!(
        "thread split: {} chars, estimated {} segments, final {}",
        original_length,
        estimated_total,
        total
    );

    let segments: Vec<Segment> = chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let text = if total > 1 {
                format!("{} {}/{}", chunk, index + 1, total)
            } else {
                chunk
            };
            let len = effective_length(&text);
            Segment {
                text,
                position: index + 1,
                total_segments: total,
                effective_length: len,
                is_within_limit: len <= limits.per_segment_limit,
            }
        })
        .collect();

    if segments.len() > limits.warn_threshold {
        warnings.push(format!(
            "Thread has {} segments. Consider shortening for better engagement.",
            segments.len()
        ));
    }

    let over_limit = segments.iter().filter(|s| !s.is_within_limit).count();
    if over_limit > 0 {
        warnings.push(format!(
            "{} segment(s) exceed the {} character limit.",
            over_limit, limits.per_segment_limit
        ));
    }

    ThreadSplitResult {
        segment_count: segments.len(),
        segments,
        original_length,
        warnings,
    }
}

/// Remove the trailing " i/N" numbering suffix, e.g. for clipboard copies.
pub fn strip_numbering(text: &str) -> &str {
    match NUMBERING_SUFFIX.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}

/// Per-segment allowance once the segment count is known
fn working_budget(limit: usize, total_segments: usize) -> usize {
    if total_segments <= 1 {
        limit
    } else {
        limit.saturating_sub(numbering_width(total_segments))
    }
}

/// Width of the widest " i/N" suffix for a thread of `total` segments
fn numbering_width(total: usize) -> usize {
    format!(" {}/{}", total, total).chars().count()
}

/// Greedy chunking loop: cut the longest prefix fitting `max_chars` at
/// the best break point until the remainder fits.
fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut remaining = text.trim();

    while !remaining.is_empty() {
        if effective_length(remaining) <= max_chars {
            chunks.push(remaining.to_string());
            break;
        }

        let split = find_split_point_preserving_urls(remaining, max_chars);
        chunks.push(remaining[..split].trim().to_string());
        remaining = remaining[split..].trim();
    }

    chunks
}
