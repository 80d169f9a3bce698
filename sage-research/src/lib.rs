//! # sage-research
//!
//! Research stage: matches a query against the fixed corpus, surfaces related
//! knowledge already in the store, and persists every corpus hit.

mod engine;

pub use engine::ResearchEngine;
