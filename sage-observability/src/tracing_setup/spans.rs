//! Span definitions per operation.

/// Create the span for one coordinator `handle` call.
#[macro_export]
macro_rules! pipeline_span {
    ($task_id:expr, $query:expr) => {
        tracing::info_span!("sage.pipeline", task_id = %$task_id, query = %$query)
    };
}

/// Create a research-stage span.
#[macro_export]
macro_rules! research_span {
    ($task_id:expr, $top_n:expr) => {
        tracing::info_span!("sage.research", task_id = %$task_id, top_n = $top_n)
    };
}

/// Create an analysis-stage span.
#[macro_export]
macro_rules! analysis_span {
    ($task_id:expr, $candidates:expr) => {
        tracing::info_span!("sage.analysis", task_id = %$task_id, candidates = $candidates)
    };
}

/// Create the span covering one full vector-index rebuild.
#[macro_export]
macro_rules! index_rebuild_span {
    ($records:expr) => {
        tracing::debug_span!("sage.index_rebuild", records = $records)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PIPELINE: &str = "sage.pipeline";
    pub const RESEARCH: &str = "sage.research";
    pub const ANALYSIS: &str = "sage.analysis";
    pub const INDEX_REBUILD: &str = "sage.index_rebuild";
}
