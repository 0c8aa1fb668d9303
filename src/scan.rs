//! Deterministic pattern scan over raw text.
//!
//! Applies the ordered rule set from [`crate::rules`], deduplicates matched
//! literals globally, and clips a context window around every accepted
//! match. The scan never fails: worst case is an empty result.

use indexmap::IndexSet;
use tracing::debug;

use crate::rules::rules;
use crate::types::link::ExtractedLink;

/// Characters of surrounding text kept on each side of a match.
const CONTEXT_RADIUS: usize = 50;

/// Scan text against the ordered rule set.
///
/// Links come back in rule order, then positional order within a rule. One
/// seen-set spans all rules: a literal that already matched an earlier rule
/// is skipped, which makes rule order the tie-break when two rules claim
/// identical text.
pub fn scan_text(text: &str) -> Vec<ExtractedLink> {
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut links = Vec::new();

    for (platform, regex) in rules() {
        for mat in regex.find_iter(text) {
            let literal = mat.as_str();
            if !seen.insert(literal.to_string()) {
                continue;
            }
            let context = context_window(text, mat.start(), mat.end());
            links.push(ExtractedLink::new(literal, platform.clone()).with_context(context));
        }
    }

    debug!(matches = links.len(), bytes = text.len(), "pattern scan complete");
    links
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clip a window of up to [`CONTEXT_RADIUS`] characters either side of the
/// match span, collapse its whitespace, and mark clipped edges with `...`.
///
/// `start` and `end` are byte offsets from the regex engine and always sit
/// on character boundaries; the window edges are computed over characters,
/// so multibyte text never splits.
fn context_window(text: &str, start: usize, end: usize) -> String {
    let before = &text[..start];
    let after = &text[end..];

    // Byte offset where the window starts inside `before`: back up at most
    // CONTEXT_RADIUS characters from the match.
    let window_start = before
        .char_indices()
        .rev()
        .take(CONTEXT_RADIUS)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0);
    let clipped_left = window_start > 0;

    // Byte offset where the window ends inside `after`.
    let window_end = after.char_indices().nth(CONTEXT_RADIUS).map(|(i, _)| i);
    let clipped_right = window_end.is_some();
    let window_end = window_end.unwrap_or(after.len());

    let window = collapse_whitespace(&format!(
        "{}{}{}",
        &before[window_start..],
        &text[start..end],
        &after[..window_end]
    ));

    let mut parts: Vec<&str> = Vec::new();
    if clipped_left {
        parts.push("...");
    }
    if !window.is_empty() {
        parts.push(&window);
    }
    if clipped_right {
        parts.push("...");
    }
    parts.join(" ")
}
