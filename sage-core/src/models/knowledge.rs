use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a knowledge record. Assigned from 1 upward in insertion order, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeId(u64);

impl KnowledgeId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for KnowledgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kb_{}", self.0)
    }
}

/// A stored fact with provenance. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeRecord {
    pub id: KnowledgeId,
    pub title: String,
    pub text: String,
    /// Where the fact came from (corpus label or producing stage).
    pub source: String,
    /// Agent that wrote the record.
    pub agent: String,
    /// Stored exactly as supplied by the writer.
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

impl KnowledgeRecord {
    /// Title and body joined by a space: the text both search mechanisms match against.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.text)
    }
}

/// Draft of a knowledge record before the store assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewKnowledge {
    pub title: String,
    pub text: String,
    pub source: String,
    pub agent: String,
    pub confidence: f64,
}

impl NewKnowledge {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            source: "unknown".to_string(),
            agent: "unknown".to_string(),
            confidence: 0.8,
        }
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}
