//! VectorDb trait — abstract interface for vector database backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::errors::ToolError;

/// Result of a similarity retrieval.
///
/// `documents` holds one chunk set per queried text; the tool layer consumes
/// the first set as its context. `metadatas[i]` and `distances[i]` describe
/// the i-th chunk of that set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub documents: Vec<Vec<String>>,
    pub metadatas: Vec<Value>,
    pub distances: Vec<f32>,
}

/// Abstract trait for vector database backends.
#[async_trait]
pub trait VectorDb: Send + Sync {
    /// Store `documents` with positionally matching `metadata_list` entries
    /// and return the generated identifiers, one per document.
    ///
    /// Length agreement between the two slices is this capability's contract
    /// to enforce. Failures are reported as [`ToolError::Storage`].
    async fn push(
        &self,
        documents: &[String],
        metadata_list: &[Value],
    ) -> Result<Vec<String>, ToolError>;

    /// Retrieve the chunks most relevant to `query`.
    ///
    /// Failures are reported as [`ToolError::Retrieval`].
    async fn retrieve(&self, query: &str) -> Result<RetrievalResult, ToolError>;
}
