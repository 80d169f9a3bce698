use crate::errors::SageResult;
use crate::models::{
    AgentActivityNote, ConversationTurn, KnowledgeId, KnowledgeRecord, NewKnowledge, NoteStatus,
    Role, TaskId, TurnMetadata,
};

/// Append-only knowledge store with keyword and vector search.
///
/// Implementations serialize writers against readers; an insert is visible to
/// every search that starts after it returns.
pub trait IKnowledgeStore: Send + Sync {
    // --- Writes ---
    fn add_knowledge(&self, draft: NewKnowledge) -> SageResult<KnowledgeRecord>;
    fn add_conversation_turn(
        &self,
        role: Role,
        message: &str,
        metadata: TurnMetadata,
    ) -> SageResult<()>;
    fn add_agent_note(
        &self,
        task_id: &TaskId,
        agent: &str,
        note: &str,
        status: NoteStatus,
    ) -> SageResult<()>;

    // --- Lookup ---
    fn get(&self, id: KnowledgeId) -> SageResult<Option<KnowledgeRecord>>;

    // --- Search ---
    fn keyword_search(&self, tokens: &[String], limit: usize) -> SageResult<Vec<KnowledgeRecord>>;
    fn vector_search(&self, query: &str, top_k: usize)
        -> SageResult<Vec<(KnowledgeRecord, f64)>>;
    fn search_conversation(&self, keywords: &[String]) -> SageResult<Vec<ConversationTurn>>;

    // --- Snapshots ---
    fn knowledge_count(&self) -> SageResult<usize>;
    fn knowledge(&self) -> SageResult<Vec<KnowledgeRecord>>;
    fn conversation(&self) -> SageResult<Vec<ConversationTurn>>;
    fn agent_notes(&self) -> SageResult<Vec<AgentActivityNote>>;
}
