//! Top-level Sage configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ObservabilityConfig, PipelineConfig, ResearchConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SAGE_*`)
/// 2. The TOML file passed to [`SageConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SageConfig {
    pub research: ResearchConfig,
    pub analysis: AnalysisConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl SageConfig {
    /// Load configuration from an optional TOML file, then apply env overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `SAGE_*` overrides read through `lookup`.
    ///
    /// Recognized keys: `SAGE_LOG_LEVEL`, `SAGE_TRACE_LOG`, `SAGE_JSON_LOGS`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("SAGE_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(path) = lookup("SAGE_TRACE_LOG") {
            self.observability.trace_log_path = path;
        }
        if let Some(flag) = lookup("SAGE_JSON_LOGS") {
            self.observability.json_logs = matches!(flag.as_str(), "1" | "true" | "yes");
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("research.confidence", self.research.confidence)?;
        check_unit("analysis.confidence", self.analysis.confidence)?;
        check_unit("pipeline.error_confidence", self.pipeline.error_confidence)?;

        let positive = [
            ("pipeline.simple_top_n", self.pipeline.simple_top_n),
            ("pipeline.complex_top_n", self.pipeline.complex_top_n),
            ("pipeline.excerpt_chars", self.pipeline.excerpt_chars),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        })
    }
}
