use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::TaskId;

/// Coordinator state transitions reported to the trace sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEventKind {
    QueryReceived,
    QueryClassified,
    ResearchDone,
    AnalysisDone,
    Responded,
    Error,
}

impl TraceEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TraceEventKind::QueryReceived => "query_received",
            TraceEventKind::QueryClassified => "query_classified",
            TraceEventKind::ResearchDone => "research_done",
            TraceEventKind::AnalysisDone => "analysis_done",
            TraceEventKind::Responded => "responded",
            TraceEventKind::Error => "error",
        }
    }
}

/// One structured trace event. Side channel only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub event: TraceEventKind,
    pub task_id: TaskId,
    pub timestamp: DateTime<Utc>,
    pub payload: serde_json::Value,
}

impl TraceEvent {
    /// Create a new event with the timestamp set to now.
    pub fn new(event: TraceEventKind, task_id: &TaskId, payload: serde_json::Value) -> Self {
        Self {
            event,
            task_id: task_id.clone(),
            timestamp: Utc::now(),
            payload,
        }
    }
}
