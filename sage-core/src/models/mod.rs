pub mod activity;
pub mod complexity;
pub mod conversation;
pub mod corpus;
pub mod events;
pub mod knowledge;
pub mod response;
pub mod task;
pub mod trace;

pub use activity::{AgentActivityNote, NoteStatus};
pub use complexity::{Complexity, Flow};
pub use conversation::{ConversationTurn, Role, TurnMetadata};
pub use corpus::CorpusEntry;
pub use events::{TraceEvent, TraceEventKind};
pub use knowledge::{KnowledgeId, KnowledgeRecord, NewKnowledge};
pub use response::{FinalAnswer, PipelineResponse};
pub use task::TaskId;
pub use trace::{
    AnalysisTrace, FoundEntry, MemorySuggestion, RankedItem, ResearchTrace, StageName, StageStep,
    StageTrace,
};
