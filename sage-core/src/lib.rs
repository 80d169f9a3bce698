//! # sage-core
//!
//! Foundation crate for the Sage retrieval pipeline.
//! Defines the record types, stage traces, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SageConfig;
pub use errors::{SageError, SageResult};
pub use models::{
    AgentActivityNote, ConversationTurn, KnowledgeId, KnowledgeRecord, NewKnowledge, Role,
    TaskId,
};
