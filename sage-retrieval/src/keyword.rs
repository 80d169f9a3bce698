//! Distinct-token substring overlap scoring.
//!
//! Shared by the knowledge store's keyword search and the research stage's
//! corpus matching.

use crate::tokenize::distinct_lowercase;

/// An item paired with its overlap score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordHit<'a, T> {
    pub item: &'a T,
    pub score: usize,
}

/// Count how many of `tokens` occur as a substring of `text`, case-insensitive.
///
/// `tokens` must already be distinct and lower-cased.
pub fn overlap_score(tokens: &[String], text: &str) -> usize {
    let haystack = text.to_lowercase();
    tokens
        .iter()
        .filter(|t| haystack.contains(t.as_str()))
        .count()
}

/// Score every item, keep those with score > 0, and sort descending by score.
///
/// The sort is stable, so equal scores keep the order of `items`.
pub fn rank_by_overlap<'a, T, F>(
    items: &'a [T],
    tokens: &[String],
    text_of: F,
    limit: usize,
) -> Vec<KeywordHit<'a, T>>
where
    F: Fn(&T) -> String,
{
    let tokens = distinct_lowercase(tokens);
    if tokens.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<KeywordHit<'a, T>> = items
        .iter()
        .filter_map(|item| {
            let score = overlap_score(&tokens, &text_of(item));
            (score > 0).then_some(KeywordHit { item, score })
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);
    hits
}
