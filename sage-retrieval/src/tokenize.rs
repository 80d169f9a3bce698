//! Tokenizers for queries and for index terms.

/// Split a query on whitespace, lowercase each word, and strip leading/trailing
/// punctuation. Inner punctuation survives, so `trade-off` stays one token.
pub fn query_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Lowercase and dedupe tokens, keeping first-seen order. Empty tokens are dropped.
pub fn distinct_lowercase(tokens: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let lowered = token.to_lowercase();
        if !lowered.is_empty() && !out.contains(&lowered) {
            out.push(lowered);
        }
    }
    out
}

/// Tokenize text into lowercase alphanumeric index terms of at least two characters.
pub fn index_terms(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| s.chars().count() >= 2)
        .map(|s| s.to_lowercase())
        .collect()
}
