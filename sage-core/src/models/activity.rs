use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::TaskId;

/// Completion status of an agent activity note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoteStatus {
    Done,
    Other(String),
}

impl NoteStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NoteStatus::Done => "done",
            NoteStatus::Other(s) => s,
        }
    }
}

impl From<String> for NoteStatus {
    fn from(s: String) -> Self {
        if s == "done" {
            NoteStatus::Done
        } else {
            NoteStatus::Other(s)
        }
    }
}

impl From<NoteStatus> for String {
    fn from(status: NoteStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Observability-only record of what an agent did for a task.
/// Never read back into decision logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentActivityNote {
    pub task_id: TaskId,
    pub agent: String,
    pub note: String,
    pub status: NoteStatus,
    pub created_at: DateTime<Utc>,
}
