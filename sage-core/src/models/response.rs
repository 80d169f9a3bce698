use serde::{Deserialize, Serialize};

use super::task::TaskId;
use super::trace::StageStep;

/// The answer half of a pipeline response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalAnswer {
    pub answer: String,
    pub confidence: f64,
    /// Failure description, present only for errored queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FinalAnswer {
    pub fn new(answer: impl Into<String>, confidence: f64) -> Self {
        Self {
            answer: answer.into(),
            confidence,
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Everything `handle` returns for one query. One JSON line in the trace log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResponse {
    pub task_id: TaskId,
    pub query: String,
    pub steps: Vec<StageStep>,
    #[serde(rename = "final")]
    pub final_answer: FinalAnswer,
}
