//! Test fixture loader for Sage corpora and scenario queries.
//!
//! Fixtures live under this crate's `data/` directory and are addressed by
//! paths relative to it.

use std::path::PathBuf;

use sage_core::models::{Complexity, CorpusEntry};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A named query with the complexity the coordinator must assign it.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub query: String,
    pub expected_complexity: Complexity,
}

/// Root directory of the fixture data.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load `corpus/<name>.json`.
pub fn load_corpus(name: &str) -> Vec<CorpusEntry> {
    load_fixture(&format!("corpus/{name}.json"))
}

/// The three-entry mock corpus.
pub fn mock_corpus() -> Vec<CorpusEntry> {
    load_corpus("mock_kb")
}

/// The larger machine-learning corpus.
pub fn ml_corpus() -> Vec<CorpusEntry> {
    load_corpus("ml_papers")
}

/// All assessment scenarios, in file order.
pub fn scenarios() -> Vec<Scenario> {
    load_fixture("scenarios/assessment.json")
}

/// Look up one scenario by name.
///
/// # Panics
/// Panics if no scenario has that name.
pub fn scenario(name: &str) -> Scenario {
    scenarios()
        .into_iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("No scenario named {name}"))
}
