//! Tool — query dispatch and document ingestion.
//!
//! This module provides:
//! - [`ToolKind`]: prompt vs RAG dispatch selection
//! - [`ToolResponse`]: the generated answer plus any retrieval context
//! - [`Tool`]: the dispatcher over the injected capabilities

mod engine;
mod kind;
mod response;

pub use engine::Tool;
pub use kind::ToolKind;
pub use response::ToolResponse;
