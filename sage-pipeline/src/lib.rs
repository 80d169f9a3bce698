//! # sage-pipeline
//!
//! The coordinator that turns one query into one response: classify, run the
//! research (and for non-simple queries, analysis) stage, assemble the answer.
//! Stage failures and panics end in the errored state instead of propagating.

pub mod answer;
pub mod classifier;
mod coordinator;
mod runtime;
pub mod state;

pub use classifier::ComplexityClassifier;
pub use coordinator::Coordinator;
pub use runtime::SageRuntime;
pub use state::PipelineState;
