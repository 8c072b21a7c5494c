//! Query dispatch over pluggable LLM and vector database backends.
//!
//! A [`Tool`] routes each query either straight to an AI client (prompt
//! mode) or through a vector database first (RAG mode), and forwards
//! document batches into the vector database for later retrieval. Both
//! backends are injected behind capability traits ([`AiClient`],
//! [`VectorDb`]); this crate ships no backend implementations of its own.

pub mod core;
pub mod llm;
pub mod logging;
pub mod tool;
pub mod vectordb;

pub use crate::core::config::{AiClientProperties, ToolProperties};
pub use crate::core::errors::ToolError;
pub use crate::llm::AiClient;
pub use crate::tool::{Tool, ToolKind, ToolResponse};
pub use crate::vectordb::{RetrievalResult, VectorDb};
