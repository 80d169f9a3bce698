//! # sage-retrieval
//!
//! The two retrieval primitives behind the knowledge store:
//! token-overlap keyword scoring and TF-IDF cosine similarity.

pub mod keyword;
pub mod tfidf;
pub mod tokenize;

pub use keyword::{rank_by_overlap, KeywordHit};
pub use tfidf::{SparseVector, TfIdfVectorizer, VectorIndex};
