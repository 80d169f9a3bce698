use serde::{Deserialize, Serialize};

/// Configuration for the coordinator's routing and answer assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Phrases that mark a query as complex when found in its lower-cased text.
    pub trigger_phrases: Vec<String>,
    /// Queries with more whitespace tokens than this are moderate. Default: 8.
    pub moderate_token_threshold: usize,
    /// Corpus hits requested on the simple flow. Default: 3.
    pub simple_top_n: usize,
    /// Corpus hits requested on the complex flow. Default: 6.
    pub complex_top_n: usize,
    /// Maximum characters of body text quoted per simple-flow line. Default: 240.
    pub excerpt_chars: usize,
    /// Keyword-search limit used when the complex flow has no candidates. Default: 4.
    pub fallback_keyword_limit: usize,
    /// Confidence attached to the errored-state answer. Default: 0.2.
    pub error_confidence: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            trigger_phrases: [
                "compare",
                "analyze",
                "trade-off",
                "efficiency",
                "recommend",
                "which is better",
                "summarize",
                "papers",
                "methodologies",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            moderate_token_threshold: 8,
            simple_top_n: 3,
            complex_top_n: 6,
            excerpt_chars: 240,
            fallback_keyword_limit: 4,
            error_confidence: 0.2,
        }
    }
}
