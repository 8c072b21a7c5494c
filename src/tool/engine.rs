use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::core::errors::ToolError;
use crate::llm::AiClient;
use crate::vectordb::VectorDb;

use super::{ToolKind, ToolResponse};

/// Dispatcher over an AI client and an optional vector database.
///
/// Holds no mutable state, so concurrent use is safe whenever the injected
/// capabilities are. Log entries carry counts, kinds, and status only —
/// query text, document content, metadata, and answers never reach the log.
pub struct Tool {
    kind: ToolKind,
    ai_client: Arc<dyn AiClient>,
    vector_db: Option<Arc<dyn VectorDb>>,
}

impl Tool {
    /// Create a tool.
    ///
    /// A [`ToolKind::Rag`] tool needs a vector database; constructing one
    /// without fails immediately rather than at first query.
    pub fn new(
        kind: ToolKind,
        ai_client: Arc<dyn AiClient>,
        vector_db: Option<Arc<dyn VectorDb>>,
    ) -> Result<Self, ToolError> {
        if kind == ToolKind::Rag && vector_db.is_none() {
            error!(%kind, "cannot build a RAG tool without a vector database");
            return Err(ToolError::UninitializedVectorDb);
        }
        debug!(%kind, "tool initialized");
        Ok(Self {
            kind,
            ai_client,
            vector_db,
        })
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Store documents with their positionally matching metadata in the
    /// vector database, returning the generated identifiers.
    ///
    /// Length agreement between `documents` and `metadata_list` is the
    /// vector database's contract to enforce, not checked here.
    pub async fn store_documents(
        &self,
        documents: &[String],
        metadata_list: &[Value],
    ) -> Result<Vec<String>, ToolError> {
        let Some(vector_db) = self.vector_db.as_ref() else {
            error!("vector database has not been configured, refusing to store documents");
            return Err(ToolError::UninitializedVectorDb);
        };

        info!(count = documents.len(), "storing documents in the vector database");
        match vector_db.push(documents, metadata_list).await {
            Ok(ids) => {
                info!(count = ids.len(), "documents stored, identifiers generated");
                Ok(ids)
            }
            Err(err) => {
                error!(error = %err, "failed to store documents");
                Err(err)
            }
        }
    }

    /// Process a query according to the tool's kind.
    ///
    /// Collaborator failures are logged and propagated unchanged; there is
    /// no fallback, retry, or partial response, and nothing is cached
    /// between calls.
    pub async fn process_query(&self, query: &str) -> Result<ToolResponse, ToolError> {
        info!(kind = %self.kind, "processing query");
        match self.kind {
            ToolKind::Rag => self.process_rag(query).await,
            ToolKind::Prompt => self.process_prompt(query).await,
        }
        .inspect_err(|err| error!(error = %err, "failed to process query"))
    }

    async fn process_rag(&self, query: &str) -> Result<ToolResponse, ToolError> {
        // Guaranteed present by the constructor; stay total rather than unwrap.
        let vector_db = self
            .vector_db
            .as_ref()
            .ok_or(ToolError::UninitializedVectorDb)?;

        let retrieval = vector_db.retrieve(query).await?;
        let chunks = retrieval.documents.into_iter().next().ok_or_else(|| {
            ToolError::Retrieval("retrieval result contained no document set".to_string())
        })?;
        debug!(chunks = chunks.len(), "retrieved context chunks");

        let answer = self.ai_client.generate_answer(query, &chunks).await?;
        info!("answer generated with retrieval context");

        Ok(ToolResponse {
            answer,
            docs: chunks,
            metadata: retrieval.metadatas,
            distances: retrieval.distances,
        })
    }

    async fn process_prompt(&self, query: &str) -> Result<ToolResponse, ToolError> {
        let answer = self.ai_client.generate_answer(query, &[]).await?;
        info!("answer generated in direct prompt mode");
        Ok(ToolResponse::from_answer(answer))
    }
}
