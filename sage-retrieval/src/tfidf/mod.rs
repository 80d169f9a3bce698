//! TF-IDF vector space: sparse vectors, the fitted vectorizer, and the
//! per-record index rebuilt from the full record set.

pub mod index;
pub mod sparse;
pub mod vectorizer;

pub use index::VectorIndex;
pub use sparse::SparseVector;
pub use vectorizer::TfIdfVectorizer;
