//! # sage-analysis
//!
//! Analysis stage: scores candidate records by domain-keyword occurrences,
//! ranks them, and stores a rendered summary.

mod engine;
pub mod scoring;
pub mod summary;

pub use engine::AnalysisEngine;
