use serde::{Deserialize, Serialize};

/// Configuration for the research stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    /// Number of memory suggestions pulled from vector search. Default: 3.
    pub memory_suggestions: usize,
    /// Confidence reported by every research trace and stored on its findings. Default: 0.9.
    pub confidence: f64,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            memory_suggestions: 3,
            confidence: 0.9,
        }
    }
}
