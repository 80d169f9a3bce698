use crate::errors::SageResult;
use crate::models::{AnalysisTrace, KnowledgeRecord, ResearchTrace, TaskId};

/// Finds candidate knowledge for a query and persists new findings.
pub trait IResearcher: Send + Sync {
    fn research(&self, query: &str, task_id: &TaskId, top_n: usize) -> SageResult<ResearchTrace>;
}

/// Ranks candidate records against a directive and stores a summary.
pub trait IAnalyzer: Send + Sync {
    fn analyze(
        &self,
        candidates: &[KnowledgeRecord],
        directive: &str,
        task_id: &TaskId,
    ) -> SageResult<AnalysisTrace>;
}
