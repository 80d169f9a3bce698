//! KnowledgeStore: `RwLock`-guarded records and index, plus turns and notes.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use sage_core::errors::{SageResult, StoreError};
use sage_core::models::{
    AgentActivityNote, ConversationTurn, KnowledgeId, KnowledgeRecord, NewKnowledge, NoteStatus,
    Role, TaskId, TurnMetadata,
};
use sage_core::traits::IKnowledgeStore;
use sage_retrieval::rank_by_overlap;
use tracing::{debug, warn};

use crate::state::StoreState;

/// Thread-safe append-only knowledge store.
///
/// Writers (`add_*`) take the write lock; an insert rebuilds the whole vector index
/// before releasing it, so readers never observe a stale index.
#[derive(Debug, Default)]
pub struct KnowledgeStore {
    state: RwLock<StoreState>,
}

impl KnowledgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> SageResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|_| poisoned())
    }

    fn write(&self) -> SageResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> sage_core::SageError {
    StoreError::LockPoisoned {
        resource: "knowledge store".to_string(),
    }
    .into()
}

impl IKnowledgeStore for KnowledgeStore {
    fn add_knowledge(&self, draft: NewKnowledge) -> SageResult<KnowledgeRecord> {
        if !(0.0..=1.0).contains(&draft.confidence) {
            warn!(
                confidence = draft.confidence,
                title = %draft.title,
                "storing knowledge with out-of-range confidence"
            );
        }
        let mut state = self.write()?;
        let record = state.insert(draft);
        debug!(
            id = %record.id,
            agent = %record.agent,
            records = state.knowledge.len(),
            "knowledge stored"
        );
        Ok(record)
    }

    fn add_conversation_turn(
        &self,
        role: Role,
        message: &str,
        metadata: TurnMetadata,
    ) -> SageResult<()> {
        let mut state = self.write()?;
        state.conversation.push(ConversationTurn {
            role,
            message: message.to_string(),
            metadata,
            created_at: Utc::now(),
        });
        Ok(())
    }

    fn add_agent_note(
        &self,
        task_id: &TaskId,
        agent: &str,
        note: &str,
        status: NoteStatus,
    ) -> SageResult<()> {
        let mut state = self.write()?;
        state.notes.push(AgentActivityNote {
            task_id: task_id.clone(),
            agent: agent.to_string(),
            note: note.to_string(),
            status,
            created_at: Utc::now(),
        });
        Ok(())
    }

    fn get(&self, id: KnowledgeId) -> SageResult<Option<KnowledgeRecord>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn keyword_search(&self, tokens: &[String], limit: usize) -> SageResult<Vec<KnowledgeRecord>> {
        let state = self.read()?;
        let hits = rank_by_overlap(&state.knowledge, tokens, |r| r.searchable_text(), limit);
        Ok(hits.into_iter().map(|h| h.item.clone()).collect())
    }

    fn vector_search(
        &self,
        query: &str,
        top_k: usize,
    ) -> SageResult<Vec<(KnowledgeRecord, f64)>> {
        let state = self.read()?;
        let results = state
            .index
            .search(query, top_k)
            .into_iter()
            .filter_map(|(id, sim)| state.get(id).map(|r| (r.clone(), sim)))
            .collect();
        Ok(results)
    }

    fn search_conversation(&self, keywords: &[String]) -> SageResult<Vec<ConversationTurn>> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Ok(Vec::new());
        }
        let state = self.read()?;
        Ok(state
            .conversation
            .iter()
            .filter(|turn| {
                let message = turn.message.to_lowercase();
                keywords.iter().any(|k| message.contains(k.as_str()))
            })
            .cloned()
            .collect())
    }

    fn knowledge_count(&self) -> SageResult<usize> {
        Ok(self.read()?.knowledge.len())
    }

    fn knowledge(&self) -> SageResult<Vec<KnowledgeRecord>> {
        Ok(self.read()?.knowledge.clone())
    }

    fn conversation(&self) -> SageResult<Vec<ConversationTurn>> {
        Ok(self.read()?.conversation.clone())
    }

    fn agent_notes(&self) -> SageResult<Vec<AgentActivityNote>> {
        Ok(self.read()?.notes.clone())
    }
}
