//! Relevance scoring and ranking.

use sage_core::models::{KnowledgeRecord, RankedItem};

/// Total non-overlapping occurrences of every keyword in the lower-cased body.
///
/// `keywords` must already be lower-cased.
pub fn keyword_score(keywords: &[String], body: &str) -> usize {
    let body = body.to_lowercase();
    keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| body.matches(k.as_str()).count())
        .sum()
}

/// Whitespace-separated word count.
pub fn body_length(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Score and rank candidates, descending by `(score, length)`.
///
/// Stable: candidates tied on both keep their input order.
pub fn rank(candidates: &[KnowledgeRecord], keywords: &[String]) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = candidates
        .iter()
        .map(|record| RankedItem {
            id: record.id,
            title: record.title.clone(),
            score: keyword_score(keywords, &record.text),
            length: body_length(&record.text),
            source: record.source.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| (b.score, b.length).cmp(&(a.score, a.length)));
    ranked
}
