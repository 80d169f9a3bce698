//! Configuration system for Sage.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod analysis_config;
pub mod observability_config;
pub mod pipeline_config;
pub mod research_config;
pub mod sage_config;

pub use analysis_config::AnalysisConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use research_config::ResearchConfig;
pub use sage_config::SageConfig;
