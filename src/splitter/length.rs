use once_cell::sync::Lazy;
use regex::Regex;

/// X bills every URL at a fixed width regardless of its actual length
pub const URL_FIXED_LENGTH: usize = 23;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("valid URL regex"));

/// Effective character count under the platform's URL-aware metric.
///
/// Counts Unicode scalar values, then swaps each embedded URL's raw
/// length for [`URL_FIXED_LENGTH`].
pub fn effective_length(text: &str) -> usize {
    let mut count = text.chars().count();

    for m in URL_REGEX.find_iter(text) {
        count = count - m.as_str().chars().count() + URL_FIXED_LENGTH;
    }

    count
}

/// Byte spans of every URL in `text`, in order of appearance.
pub fn url_spans(text: &str) -> Vec<(usize, usize)> {
    URL_REGEX
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect()
}
