//! Page and chunk types with source tracking for citations

use serde::{Deserialize, Serialize};

/// Text extracted from a single PDF page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Page number as emitted by the PDF library (1-based).
    pub number: u32,
    /// Extracted and cleaned text; may be empty for image-only pages.
    pub text: String,
    /// Source file basename.
    pub source: String,
}

/// Origin of a chunk, carried through the store into citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSource {
    /// Source file basename.
    pub source: String,
    /// Page number the chunk was cut from.
    pub page: u32,
}

/// A bounded text segment, the unit of embedding and retrieval.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub content: String,
    pub source: ChunkSource,
}
