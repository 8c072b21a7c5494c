use async_trait::async_trait;

use crate::core::errors::ToolError;

/// Answer-generation capability consumed by the tool layer.
///
/// Timeouts, retries, and concurrency limits are the implementation's
/// concern; the tool layer only forwards queries and propagates failures.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Generate an answer for `query`.
    ///
    /// `context` carries retrieved document chunks for grounding; prompt-mode
    /// callers pass an empty slice. Failures are reported as
    /// [`ToolError::Generation`].
    async fn generate_answer(
        &self,
        query: &str,
        context: &[String],
    ) -> Result<String, ToolError>;
}
