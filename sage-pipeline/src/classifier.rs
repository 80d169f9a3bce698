//! Heuristic query complexity classification.

use sage_core::config::PipelineConfig;
use sage_core::models::Complexity;

/// Trigger phrase → complex; long query → moderate; otherwise simple.
#[derive(Debug, Clone)]
pub struct ComplexityClassifier {
    trigger_phrases: Vec<String>,
    moderate_token_threshold: usize,
}

impl ComplexityClassifier {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            trigger_phrases: config
                .trigger_phrases
                .iter()
                .map(|p| p.to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
            moderate_token_threshold: config.moderate_token_threshold,
        }
    }

    pub fn classify(&self, query: &str) -> Complexity {
        let lowered = query.to_lowercase();
        if self
            .trigger_phrases
            .iter()
            .any(|p| lowered.contains(p.as_str()))
        {
            Complexity::Complex
        } else if lowered.split_whitespace().count() > self.moderate_token_threshold {
            Complexity::Moderate
        } else {
            Complexity::Simple
        }
    }
}

impl Default for ComplexityClassifier {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}
