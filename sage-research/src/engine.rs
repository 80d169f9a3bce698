//! ResearchEngine: implements IResearcher.
//!
//! Step 1: corpus matching (distinct-token overlap, stable on corpus order)
//! Step 2: memory suggestions (vector search over what earlier calls stored)
//! Step 3: persist hits, then record an activity note

use std::sync::Arc;

use chrono::Utc;
use sage_core::config::ResearchConfig;
use sage_core::constants::RESEARCH_AGENT;
use sage_core::errors::SageResult;
use sage_core::models::{
    CorpusEntry, FoundEntry, MemorySuggestion, NewKnowledge, NoteStatus, ResearchTrace, TaskId,
};
use sage_core::traits::{IKnowledgeStore, IResearcher};
use sage_observability::research_span;
use sage_retrieval::rank_by_overlap;
use sage_retrieval::tokenize::query_tokens;
use tracing::{debug, info};

/// Research stage over a read-only corpus and a shared knowledge store.
pub struct ResearchEngine {
    store: Arc<dyn IKnowledgeStore>,
    corpus: Vec<CorpusEntry>,
    config: ResearchConfig,
}

impl ResearchEngine {
    pub fn new(
        store: Arc<dyn IKnowledgeStore>,
        corpus: Vec<CorpusEntry>,
        config: ResearchConfig,
    ) -> Self {
        Self {
            store,
            corpus,
            config,
        }
    }

    pub fn corpus(&self) -> &[CorpusEntry] {
        &self.corpus
    }

    /// Corpus entries matching `query`, best first, at most `top_n`.
    pub fn match_corpus(&self, query: &str, top_n: usize) -> Vec<&CorpusEntry> {
        let tokens = query_tokens(query);
        rank_by_overlap(&self.corpus, &tokens, CorpusEntry::searchable_text, top_n)
            .into_iter()
            .map(|hit| {
                debug!(title = %hit.item.title, score = hit.score, "corpus hit");
                hit.item
            })
            .collect()
    }

    fn memory_suggestions(&self, query: &str) -> SageResult<Vec<MemorySuggestion>> {
        let hits = self
            .store
            .vector_search(query, self.config.memory_suggestions)?;
        Ok(hits
            .into_iter()
            .map(|(record, similarity)| MemorySuggestion {
                id: record.id,
                title: record.title,
                similarity,
                source: record.source,
            })
            .collect())
    }
}

impl IResearcher for ResearchEngine {
    fn research(&self, query: &str, task_id: &TaskId, top_n: usize) -> SageResult<ResearchTrace> {
        let span = research_span!(task_id, top_n);
        let _guard = span.enter();
        let start = Utc::now();

        let hits = self.match_corpus(query, top_n);

        // Suggestions must not see this call's own writes.
        let memory_suggestions = self.memory_suggestions(query)?;

        let mut found = Vec::with_capacity(hits.len());
        let mut saved = Vec::with_capacity(hits.len());
        for entry in hits {
            let record = self.store.add_knowledge(
                NewKnowledge::new(&entry.title, &entry.text)
                    .source(&entry.source)
                    .agent(RESEARCH_AGENT)
                    .confidence(self.config.confidence),
            )?;
            saved.push(record.id);
            found.push(FoundEntry {
                title: entry.title.clone(),
                source: entry.source.clone(),
            });
        }

        let note = format!(
            "Found {} entries; mem_hits={}",
            found.len(),
            memory_suggestions.len()
        );
        self.store
            .add_agent_note(task_id, RESEARCH_AGENT, &note, NoteStatus::Done)?;

        info!(
            found = found.len(),
            mem_hits = memory_suggestions.len(),
            "research complete"
        );

        Ok(ResearchTrace {
            task_id: task_id.clone(),
            agent: RESEARCH_AGENT.to_string(),
            query: query.to_string(),
            found,
            memory_suggestions,
            saved,
            start,
            end: Utc::now(),
            confidence: self.config.confidence,
        })
    }
}
