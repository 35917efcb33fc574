//! Document ingestion: PDF loading and text chunking

mod chunker;
mod loader;

pub use chunker::TextChunker;
pub use loader::PdfLoader;

#[cfg(test)]
pub(crate) use loader::test_support;
