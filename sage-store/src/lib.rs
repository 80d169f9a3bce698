//! # sage-store
//!
//! [`KnowledgeStore`]: the single shared source of truth for knowledge records,
//! conversation turns, and agent activity notes, plus the search index over the
//! records. One read-write lock guards all of it.

mod engine;
mod state;

pub use engine::KnowledgeStore;
