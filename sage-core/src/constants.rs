/// Sage system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Agent label recorded on knowledge written by the research stage.
pub const RESEARCH_AGENT: &str = "ResearchStage";

/// Agent label recorded on knowledge written by the analysis stage.
pub const ANALYSIS_AGENT: &str = "AnalysisStage";

/// Agent label recorded on synthesis records and coordinator turns.
pub const COORDINATOR_AGENT: &str = "Coordinator";

/// Source label for corpus entries that do not name one.
pub const DEFAULT_CORPUS_SOURCE: &str = "mock_kb";

/// Fixed user-facing answer for a query that ended in the errored state.
pub const ERROR_FALLBACK_ANSWER: &str =
    "Sorry, I encountered an error while processing your request.";

/// Answer for a simple query whose research produced no records.
pub const NO_RESULTS_ANSWER: &str = "No results found.";

/// Line used when the analysis summary record cannot be resolved.
pub const NO_SUMMARY_LINE: &str = "No analysis summary found.";

/// Line used by the analysis summary when there is nothing to rank.
pub const NO_ITEMS_LINE: &str = "No items to analyze.";
