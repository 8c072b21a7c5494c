//! AI client capability.
//!
//! The tool layer consumes answer generation through the [`AiClient`] trait;
//! concrete backends (HTTP providers, local models) live in the embedding
//! application.

mod client;

pub use client::AiClient;
