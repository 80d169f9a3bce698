use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CORPUS_SOURCE;

/// One entry of the fixed external corpus the research stage matches against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub title: String,
    pub text: String,
    #[serde(default = "default_source")]
    pub source: String,
}

impl CorpusEntry {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            source: source.into(),
        }
    }

    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.text)
    }
}

fn default_source() -> String {
    DEFAULT_CORPUS_SOURCE.to_string()
}
