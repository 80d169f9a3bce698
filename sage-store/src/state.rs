//! Lock-protected store state.

use std::collections::HashMap;

use chrono::Utc;
use sage_core::models::{
    AgentActivityNote, ConversationTurn, KnowledgeId, KnowledgeRecord, NewKnowledge,
};
use sage_observability::index_rebuild_span;
use sage_retrieval::VectorIndex;

/// Everything behind the store lock. Records and index change together.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub knowledge: Vec<KnowledgeRecord>,
    /// Record id → position in `knowledge`.
    pub positions: HashMap<KnowledgeId, usize>,
    pub index: VectorIndex,
    pub conversation: Vec<ConversationTurn>,
    pub notes: Vec<AgentActivityNote>,
    last_id: u64,
}

impl StoreState {
    /// Append a record under the next id and rebuild the index over all records.
    pub fn insert(&mut self, draft: NewKnowledge) -> KnowledgeRecord {
        self.last_id += 1;
        let record = KnowledgeRecord {
            id: KnowledgeId::new(self.last_id),
            title: draft.title,
            text: draft.text,
            source: draft.source,
            agent: draft.agent,
            confidence: draft.confidence,
            created_at: Utc::now(),
        };

        self.positions.insert(record.id, self.knowledge.len());
        self.knowledge.push(record.clone());

        let span = index_rebuild_span!(self.knowledge.len());
        let _guard = span.enter();
        self.index.rebuild(
            self.knowledge
                .iter()
                .map(|r| (r.id, r.searchable_text())),
        );
        record
    }

    pub fn get(&self, id: KnowledgeId) -> Option<&KnowledgeRecord> {
        self.positions.get(&id).map(|&pos| &self.knowledge[pos])
    }
}
