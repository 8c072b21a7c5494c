//! Vector database capability.
//!
//! Document storage and similarity retrieval behind the [`VectorDb`] trait.
//! Embedding generation and ranking belong to the backend, not to this
//! crate.

mod store;

pub use store::{RetrievalResult, VectorDb};
