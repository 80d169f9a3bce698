//! Per-stage traces: what a stage did for a task.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::knowledge::KnowledgeId;
use super::task::TaskId;

/// A corpus hit reported by the research stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundEntry {
    pub title: String,
    pub source: String,
}

/// Previously stored knowledge surfaced by vector search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySuggestion {
    pub id: KnowledgeId,
    pub title: String,
    /// Cosine similarity in [0.0, 1.0].
    pub similarity: f64,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchTrace {
    pub task_id: TaskId,
    pub agent: String,
    pub query: String,
    pub found: Vec<FoundEntry>,
    pub memory_suggestions: Vec<MemorySuggestion>,
    /// Ids of the records persisted for `found`, in the same order.
    pub saved: Vec<KnowledgeId>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub confidence: f64,
}

/// One entry of the analysis ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub id: KnowledgeId,
    pub title: String,
    /// Domain keyword occurrences in the body.
    pub score: usize,
    /// Whitespace token count of the body.
    pub length: usize,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisTrace {
    pub task_id: TaskId,
    pub agent: String,
    pub directive: String,
    pub ranked: Vec<RankedItem>,
    /// Record holding the rendered summary.
    pub summary_id: KnowledgeId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageName {
    Research,
    Analysis,
}

impl StageName {
    pub fn as_str(self) -> &'static str {
        match self {
            StageName::Research => "research",
            StageName::Analysis => "analysis",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StageTrace {
    Research(ResearchTrace),
    Analysis(AnalysisTrace),
}

impl StageTrace {
    pub fn agent(&self) -> &str {
        match self {
            StageTrace::Research(t) => &t.agent,
            StageTrace::Analysis(t) => &t.agent,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            StageTrace::Research(t) => t.confidence,
            StageTrace::Analysis(t) => t.confidence,
        }
    }
}

/// A stage trace tagged with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageStep {
    pub stage: StageName,
    pub trace: StageTrace,
}

impl StageStep {
    pub fn research(trace: ResearchTrace) -> Self {
        Self {
            stage: StageName::Research,
            trace: StageTrace::Research(trace),
        }
    }

    pub fn analysis(trace: AnalysisTrace) -> Self {
        Self {
            stage: StageName::Analysis,
            trace: StageTrace::Analysis(trace),
        }
    }
}
