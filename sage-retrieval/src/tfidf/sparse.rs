use std::collections::HashMap;

/// Sparse weight vector keyed by term id, entries sorted by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from a term-id → weight map, dropping zero weights.
    pub fn from_weights(weights: HashMap<usize, f64>) -> Self {
        let mut entries: Vec<(usize, f64)> =
            weights.into_iter().filter(|(_, w)| *w != 0.0).collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        Self { entries }
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// L2-normalize. A zero vector stays zero.
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > f64::EPSILON {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }

    /// Dot product via merge-join over the sorted entries.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_w) = self.entries[i];
            let (b_id, b_w) = other.entries[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of non-zero terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn weight(&self, term_id: usize) -> f64 {
        self.entries
            .binary_search_by_key(&term_id, |(id, _)| *id)
            .map(|idx| self.entries[idx].1)
            .unwrap_or(0.0)
    }
}
