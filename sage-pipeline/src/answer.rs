//! Answer text assembly for both flows.

use sage_core::constants::{NO_RESULTS_ANSWER, NO_SUMMARY_LINE};
use sage_core::models::KnowledgeRecord;

/// At most `max_chars` characters of `text`, with `...` appended when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// One `- <title>: <excerpt>` line per record.
pub fn simple(records: &[KnowledgeRecord], max_chars: usize) -> String {
    if records.is_empty() {
        return NO_RESULTS_ANSWER.to_string();
    }
    records
        .iter()
        .map(|r| format!("- {}: {}", r.title, excerpt(&r.text, max_chars)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Synthesis header followed by the analysis summary.
pub fn synthesis(query: &str, summary: Option<&str>) -> String {
    [
        format!("Synthesis for: {query}"),
        "Key findings:".to_string(),
        summary.unwrap_or(NO_SUMMARY_LINE).to_string(),
    ]
    .join("\n")
}
