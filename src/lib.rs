//! doc-rag: PDF question answering with retrieval-augmented generation
//!
//! Ingests PDF documents, splits and embeds them into a persistent vector
//! store, and answers natural-language questions by prompting an LLM with
//! the retrieved passages, returning an answer plus source citations.

pub mod config;
pub mod embeddings;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use types::{
    document::{Chunk, ChunkSource, Page},
    query::QueryRequest,
    response::{Citation, IngestResponse, QueryResponse},
};
