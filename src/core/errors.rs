use thiserror::Error;

/// Errors surfaced by the tool layer.
///
/// Collaborator implementations report failures through the matching variant;
/// the [`Tool`](crate::Tool) logs them and propagates them unchanged.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The vector database failed to store a document batch.
    #[error("storage failure: {0}")]
    Storage(String),
    /// The vector database failed to retrieve chunks, or returned a result
    /// with no document set in it.
    #[error("retrieval failure: {0}")]
    Retrieval(String),
    /// The AI client failed to generate an answer.
    #[error("generation failure: {0}")]
    Generation(String),
    /// A vector database is required but was never configured.
    #[error("vector database has not been configured")]
    UninitializedVectorDb,
    /// A configuration model failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ToolError {
    pub fn storage<E: std::fmt::Display>(err: E) -> Self {
        ToolError::Storage(err.to_string())
    }

    pub fn retrieval<E: std::fmt::Display>(err: E) -> Self {
        ToolError::Retrieval(err.to_string())
    }

    pub fn generation<E: std::fmt::Display>(err: E) -> Self {
        ToolError::Generation(err.to_string())
    }

    pub fn invalid_config<E: std::fmt::Display>(err: E) -> Self {
        ToolError::InvalidConfig(err.to_string())
    }
}
