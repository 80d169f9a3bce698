use serde::{Deserialize, Serialize};

/// Configuration for the analysis stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Domain keywords counted in each candidate body.
    pub keywords: Vec<String>,
    /// Confidence reported by every analysis trace and stored on its summary. Default: 0.85.
    pub confidence: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keywords: [
                "efficiency",
                "performance",
                "trade-off",
                "accuracy",
                "scalability",
                "compute",
                "parameters",
                "training",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            confidence: 0.85,
        }
    }
}
