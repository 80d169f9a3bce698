//! Record-id → TF-IDF vector index, rebuilt from scratch on every change.

use sage_core::models::KnowledgeId;
use tracing::debug;

use super::sparse::SparseVector;
use super::vectorizer::TfIdfVectorizer;

/// Cosine-similarity index over the full record set.
///
/// Entries keep insertion order, which is the tie-break for equal similarity.
#[derive(Debug, Clone, Default)]
pub struct VectorIndex {
    vectorizer: TfIdfVectorizer,
    entries: Vec<(KnowledgeId, SparseVector)>,
}

impl VectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refit the vocabulary and IDF over `documents` and recompute every vector.
    pub fn rebuild<I>(&mut self, documents: I)
    where
        I: IntoIterator<Item = (KnowledgeId, String)>,
    {
        let (ids, texts): (Vec<KnowledgeId>, Vec<String>) = documents.into_iter().unzip();
        let vectorizer = TfIdfVectorizer::fit(&texts);
        let entries = ids
            .into_iter()
            .zip(texts.iter())
            .map(|(id, text)| (id, vectorizer.transform(text)))
            .collect();

        self.vectorizer = vectorizer;
        self.entries = entries;

        debug!(
            documents = self.entries.len(),
            vocabulary = self.vectorizer.vocabulary_len(),
            "vector index rebuilt"
        );
    }

    /// Top-k records by cosine similarity with `query`, descending.
    ///
    /// Returns nothing for an empty index or a query with no known terms.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<(KnowledgeId, f64)> {
        if self.entries.is_empty() || top_k == 0 {
            return Vec::new();
        }
        let query_vec = self.vectorizer.transform(query);
        if query_vec.is_zero() {
            return Vec::new();
        }

        let mut scored: Vec<(KnowledgeId, f64)> = self
            .entries
            .iter()
            .map(|(id, vec)| (*id, query_vec.dot(vec).clamp(0.0, 1.0)))
            .collect();

        // Stable: equal similarity keeps insertion order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        scored
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vectorizer.vocabulary_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(texts: &[&str]) -> VectorIndex {
        let mut index = VectorIndex::new();
        index.rebuild(
            texts
                .iter()
                .enumerate()
                .map(|(i, t)| (KnowledgeId::new(i as u64 + 1), t.to_string())),
        );
        index
    }

    #[test]
    fn empty_index_yields_nothing() {
        assert!(VectorIndex::new().search("anything at all", 3).is_empty());
    }

    #[test]
    fn unknown_query_terms_yield_nothing() {
        let index = index_of(&["deep learning basics"]);
        assert!(index.search("cooking pasta", 3).is_empty());
    }

    #[test]
    fn best_match_ranks_first() {
        let index = index_of(&[
            "AI in Healthcare diagnosis and drug discovery",
            "Scalable Training parallelism and efficiency trade-offs",
            "Deep Learning Basics CNNs RNNs transformers",
        ]);
        let hits = index.search("scalable training efficiency", 3);
        assert_eq!(hits[0].0, KnowledgeId::new(2));
        assert!(hits.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn identical_text_has_similarity_one() {
        let index = index_of(&["deep learning basics", "ai in healthcare"]);
        let hits = index.search("deep learning basics", 1);
        assert!((hits[0].1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_similarity_records_still_rank_last() {
        let index = index_of(&["alpha beta", "gamma delta", "alpha gamma"]);
        let hits = index.search("beta", 3);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].0, KnowledgeId::new(1));
        assert_eq!(hits[2].1, 0.0);
        // Equal zero scores keep insertion order.
        assert_eq!(hits[1].0, KnowledgeId::new(2));
        assert_eq!(hits[2].0, KnowledgeId::new(3));
    }

    #[test]
    fn rebuild_replaces_previous_state() {
        let mut index = index_of(&["alpha"]);
        index.rebuild(vec![
            (KnowledgeId::new(1), "alpha".to_string()),
            (KnowledgeId::new(2), "beta".to_string()),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.vocabulary_len(), 2);
    }
}
