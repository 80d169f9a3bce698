//! AnalysisEngine: implements IAnalyzer.

use std::sync::Arc;

use chrono::Utc;
use sage_core::config::AnalysisConfig;
use sage_core::constants::ANALYSIS_AGENT;
use sage_core::errors::SageResult;
use sage_core::models::{AnalysisTrace, KnowledgeRecord, NewKnowledge, NoteStatus, TaskId};
use sage_core::traits::{IAnalyzer, IKnowledgeStore};
use sage_observability::analysis_span;
use tracing::{debug, info};

use crate::{scoring, summary};

/// Analysis stage writing its summaries into a shared knowledge store.
pub struct AnalysisEngine {
    store: Arc<dyn IKnowledgeStore>,
    keywords: Vec<String>,
    confidence: f64,
}

impl AnalysisEngine {
    pub fn new(store: Arc<dyn IKnowledgeStore>, config: AnalysisConfig) -> Self {
        Self {
            store,
            keywords: config.keywords.iter().map(|k| k.to_lowercase()).collect(),
            confidence: config.confidence,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl IAnalyzer for AnalysisEngine {
    fn analyze(
        &self,
        candidates: &[KnowledgeRecord],
        directive: &str,
        task_id: &TaskId,
    ) -> SageResult<AnalysisTrace> {
        let span = analysis_span!(task_id, candidates.len());
        let _guard = span.enter();
        let start = Utc::now();

        let ranked = scoring::rank(candidates, &self.keywords);
        for item in &ranked {
            debug!(id = %item.id, score = item.score, length = item.length, "ranked");
        }

        let text = summary::render(task_id, directive, &ranked);
        let record = self.store.add_knowledge(
            NewKnowledge::new(summary::record_title(task_id), text)
                .source(ANALYSIS_AGENT)
                .agent(ANALYSIS_AGENT)
                .confidence(self.confidence),
        )?;

        let note = format!("Analyzed {} items", ranked.len());
        self.store
            .add_agent_note(task_id, ANALYSIS_AGENT, &note, NoteStatus::Done)?;

        info!(items = ranked.len(), summary_id = %record.id, "analysis complete");

        Ok(AnalysisTrace {
            task_id: task_id.clone(),
            agent: ANALYSIS_AGENT.to_string(),
            directive: directive.to_string(),
            ranked,
            summary_id: record.id,
            start,
            end: Utc::now(),
            confidence: self.confidence,
        })
    }
}
