//! Shared data types

pub mod document;
pub mod query;
pub mod response;

pub use document::{Chunk, ChunkSource, Page};
pub use query::QueryRequest;
pub use response::{Citation, IngestResponse, QueryResponse};
