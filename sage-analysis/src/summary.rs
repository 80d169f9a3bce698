//! Summary text stored for each analysis run.

use sage_core::constants::NO_ITEMS_LINE;
use sage_core::models::{RankedItem, TaskId};

/// Header line, then one numbered line per ranked item.
pub fn render(task_id: &TaskId, directive: &str, ranked: &[RankedItem]) -> String {
    let mut lines = Vec::with_capacity(ranked.len() + 1);
    lines.push(format!(
        "Analysis for task {task_id} - directive: {directive}"
    ));
    for (i, item) in ranked.iter().enumerate() {
        lines.push(format!(
            "{}. {} (score={}, length={}, source={})",
            i + 1,
            item.title,
            item.score,
            item.length,
            item.source
        ));
    }
    if ranked.is_empty() {
        lines.push(NO_ITEMS_LINE.to_string());
    }
    lines.join("\n")
}

/// Title of the record holding a task's summary.
pub fn record_title(task_id: &TaskId) -> String {
    format!("Analysis:{task_id}")
}
