use super::length::url_spans;

/// One tier of the split-point search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakTier {
    /// Double line break (paragraph boundary)
    Paragraph,
    /// Single line break
    Line,
    /// Sentence terminator followed by a space or line break
    Sentence,
    /// Clause punctuation or a spaced dash, followed by a space
    Clause,
    /// Plain space
    Word,
}

/// Tiers in descending priority, each with its minimum-position floor as
/// a fraction of the window. A break below its floor is rejected so no
/// tier can produce a pathologically short segment.
const BREAK_TIERS: &[(BreakTier, f64)] = &[
    (BreakTier::Paragraph, 0.5),
    (BreakTier::Line, 0.5),
    (BreakTier::Sentence, 0.4),
    (BreakTier::Clause, 0.3),
    (BreakTier::Word, 0.2),
];

const SENTENCE_ENDERS: &[&str] = &[". ", "! ", "? ", ".\n", "!\n", "?\n"];
const CLAUSE_ENDERS: &[&str] = &[", ", "; ", ": ", " — ", " - "];

impl BreakTier {
    /// Locate this tier's break in `window`, as the byte offset where the
    /// chunk ends. Sentence and clause breaks land just past the
    /// punctuation so it stays with the preceding chunk; the other tiers
    /// land on the delimiter itself, which the caller trims away.
    fn locate(self, window: &str) -> Option<usize> {
        match self {
            BreakTier::Paragraph => window.rfind("\n\n"),
            BreakTier::Line => window.rfind('\n'),
            BreakTier::Sentence => rightmost_break(window, SENTENCE_ENDERS),
            BreakTier::Clause => rightmost_break(window, CLAUSE_ENDERS),
            BreakTier::Word => window.rfind(' '),
        }
    }
}

/// Latest break across an ender set, positioned on the delimiter's final
/// character. Every ender ends in an ASCII space or newline, so the
/// returned offset is always a char boundary.
fn rightmost_break(window: &str, enders: &[&str]) -> Option<usize> {
    enders
        .iter()
        .filter_map(|ender| window.rfind(ender).map(|pos| pos + ender.len() - 1))
        .max()
}

/// Byte offset of the `n`th char, or the full length when text is shorter.
fn byte_of_char(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Find the best split point for a chunk of at most `max_chars`
/// characters, returning a byte offset into `text`.
///
/// Each tier is tried in priority order within the candidate window (the
/// first `max_chars` chars); the first break clearing its floor wins.
/// The hard-cut fallback advances at least one character, which is what
/// bounds the chunking loop.
pub fn find_split_point(text: &str, max_chars: usize) -> usize {
    if text.chars().count() <= max_chars {
        return text.len();
    }

    let window_end = byte_of_char(text, max_chars);
    let window = &text[..window_end];

    for &(tier, floor) in BREAK_TIERS {
        if let Some(pos) = tier.locate(window) {
            let char_pos = text[..pos].chars().count();
            if char_pos as f64 > max_chars as f64 * floor {
                return pos;
            }
        }
    }

    // Hard cut at the budget boundary, possibly mid-word
    byte_of_char(text, max_chars.max(1))
}

/// Like [`find_split_point`], but never splits inside a URL.
///
/// A split landing strictly inside a URL span is relocated to just
/// before the URL (trailing whitespace trimmed), unless that would leave
/// an empty chunk — then the URL is allowed to be cut after all.
pub fn find_split_point_preserving_urls(text: &str, max_chars: usize) -> usize {
    let split = find_split_point(text, max_chars);

    for (url_start, url_end) in url_spans(text) {
        if split > url_start && split < url_end {
            let before = text[..url_start].trim_end();
            if !before.is_empty() {
                return before.len();
            }
        }
    }

    split
}
