//! Default wiring of store, stages, event log and coordinator.

use std::sync::Arc;

use sage_analysis::AnalysisEngine;
use sage_core::models::{CorpusEntry, PipelineResponse};
use sage_core::SageConfig;
use sage_observability::EventLog;
use sage_research::ResearchEngine;
use sage_store::KnowledgeStore;
use tracing::info;

use crate::coordinator::Coordinator;

/// An in-memory Sage instance built from a config and a corpus.
pub struct SageRuntime {
    config: SageConfig,
    store: Arc<KnowledgeStore>,
    events: Arc<EventLog>,
    coordinator: Coordinator,
}

impl SageRuntime {
    pub fn new(config: SageConfig, corpus: Vec<CorpusEntry>) -> Self {
        let store = Arc::new(KnowledgeStore::new());
        let events = Arc::new(EventLog::new());
        info!(corpus = corpus.len(), "starting sage runtime");

        let researcher = Arc::new(ResearchEngine::new(
            store.clone(),
            corpus,
            config.research.clone(),
        ));
        let analyzer = Arc::new(AnalysisEngine::new(store.clone(), config.analysis.clone()));
        let coordinator = Coordinator::new(
            store.clone(),
            researcher,
            analyzer,
            events.clone(),
            config.pipeline.clone(),
        );

        Self {
            config,
            store,
            events,
            coordinator,
        }
    }

    pub fn handle(&self, query: &str) -> PipelineResponse {
        self.coordinator.handle(query)
    }

    pub fn config(&self) -> &SageConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<KnowledgeStore> {
        &self.store
    }

    pub fn events(&self) -> &Arc<EventLog> {
        &self.events
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }
}
