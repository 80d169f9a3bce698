pub mod sink;
pub mod stage;
pub mod store;

pub use sink::ITraceSink;
pub use stage::{IAnalyzer, IResearcher};
pub use store::IKnowledgeStore;
