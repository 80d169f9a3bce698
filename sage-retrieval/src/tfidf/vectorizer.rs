//! Smoothed TF-IDF fitted over a document set.
//!
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, raw term counts for tf, L2-normalized output.

use std::collections::HashMap;

use super::sparse::SparseVector;
use crate::tokenize::index_terms;

/// Vocabulary and IDF weights fitted from a document set.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    /// Term → id, ids assigned in first-seen order.
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    documents: usize,
}

impl TfIdfVectorizer {
    /// Fit vocabulary and document frequencies over `documents`.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for doc in documents {
            let mut seen_in_doc: Vec<usize> = Vec::new();
            for term in index_terms(doc.as_ref()) {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(term).or_insert(next_id);
                if id == doc_freq.len() {
                    doc_freq.push(0);
                }
                if !seen_in_doc.contains(&id) {
                    seen_in_doc.push(id);
                    doc_freq[id] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self {
            vocabulary,
            idf,
            documents: documents.len(),
        }
    }

    /// Project text into the fitted space. Terms outside the vocabulary contribute nothing.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut weights: HashMap<usize, f64> = HashMap::new();
        for term in index_terms(text) {
            if let Some(&id) = self.vocabulary.get(&term) {
                *weights.entry(id).or_default() += 1.0;
            }
        }
        for (id, tf) in weights.iter_mut() {
            *tf *= self.idf[*id];
        }
        SparseVector::from_weights(weights).normalized()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn document_count(&self) -> usize {
        self.documents
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&id| self.idf[id])
    }
}
