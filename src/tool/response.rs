use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a processed query.
///
/// RAG dispatch fills every field; prompt dispatch carries the answer alone
/// and leaves the context fields empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// The generated answer.
    pub answer: String,
    /// Context chunks the answer was grounded on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
    /// Metadata entries, positionally matching `docs`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<Value>,
    /// Similarity distances, positionally matching `docs`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distances: Vec<f32>,
}

impl ToolResponse {
    /// Response for a prompt-mode answer with no retrieval context.
    pub fn from_answer(answer: String) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }
}
