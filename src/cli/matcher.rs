//! Host-side matching of suggestions against the user's filter text.
//!
//! Plugins return every candidate; ranking them is the host's job.

use crate::core::catalog::CatalogItem;

/// How well a filter matched a piece of text. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchScore {
    /// Characters skipped between the first and last matched character
    gaps: usize,
    /// Position of the first matched character
    start: usize,
}

/// Case-insensitive subsequence match of `filter` in `text`
pub fn score(filter: &str, text: &str) -> Option<MatchScore> {
    let needle: Vec<char> = filter.chars().flat_map(char::to_lowercase).collect();
    let haystack: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();

    if needle.is_empty() {
        return Some(MatchScore { gaps: 0, start: 0 });
    }

    // Try every start position of the first character and keep the tightest span
    let mut best: Option<MatchScore> = None;
    for (start, _) in haystack
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == needle[0])
    {
        let Some(end) = span_end(&needle[1..], &haystack[start + 1..]) else {
            break;
        };
        let candidate = MatchScore {
            gaps: end + 1 - needle.len(),
            start,
        };
        if best.map_or(true, |b| candidate < b) {
            best = Some(candidate);
        }
    }

    best
}

/// Index one past the last matched character of `needle` in `haystack`
fn span_end(needle: &[char], haystack: &[char]) -> Option<usize> {
    let mut matched = 0;
    let mut end = 0;

    for (i, c) in haystack.iter().enumerate() {
        if matched == needle.len() {
            break;
        }
        if *c == needle[matched] {
            matched += 1;
            end = i + 1;
        }
    }

    (matched == needle.len()).then_some(end)
}

/// Items matching `filter` on title or description, best first.
/// Ties keep the plugin's order.
pub fn rank<'a>(filter: &str, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
    let filter = filter.trim();
    let mut scored: Vec<(MatchScore, &CatalogItem)> = items
        .iter()
        .filter_map(|item| {
            let title = score(filter, &item.label);
            let description = score(filter, &item.description);
            let best = match (title, description) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
            best.map(|s| (s, item))
        })
        .collect();

    scored.sort_by_key(|(s, _)| *s);
    scored.into_iter().map(|(_, item)| item).collect()
}
