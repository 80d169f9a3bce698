//! Research corpus selection.

use std::path::Path;

use anyhow::Context;
use sage_core::models::CorpusEntry;

/// The three-entry corpus used when no `--corpus` file is given.
pub fn default_corpus() -> Vec<CorpusEntry> {
    vec![
        CorpusEntry::new(
            "Deep Learning Basics",
            "Covers CNNs, RNNs, and transformers.",
            "mock_kb",
        ),
        CorpusEntry::new(
            "AI in Healthcare",
            "Applications include diagnosis and drug discovery.",
            "mock_kb",
        ),
        CorpusEntry::new(
            "Scalable Training",
            "Discusses parallelism and efficiency trade-offs.",
            "mock_kb",
        ),
    ]
}

/// Read a JSON array of `{title, text, source?}` entries, or fall back to the default corpus.
pub fn load(path: Option<&Path>) -> anyhow::Result<Vec<CorpusEntry>> {
    let Some(path) = path else {
        return Ok(default_corpus());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading corpus {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing corpus {}", path.display()))
}
