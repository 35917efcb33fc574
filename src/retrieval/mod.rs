//! Retrieval: nearest-neighbor lookup over the vector store

pub mod store;

use std::sync::Arc;

use crate::embeddings::OnnxEmbedder;
use crate::error::{Error, Result};
use store::{ScoredEntry, VectorStore};

/// Embeds a question and returns the top-k most similar stored chunks.
///
/// No re-ranking, metadata filtering, or similarity floor: when nothing
/// relevant is stored, the k least-irrelevant chunks come back anyway and
/// the prompt's grounding instruction handles it.
pub struct Retriever {
    embedder: Arc<OnnxEmbedder>,
    store: Arc<VectorStore>,
    top_k: usize,
}

impl Retriever {
    pub fn new(embedder: Arc<OnnxEmbedder>, store: Arc<VectorStore>, top_k: usize) -> Self {
        Self {
            embedder,
            store,
            top_k,
        }
    }

    pub async fn retrieve(&self, question: &str) -> Result<Vec<ScoredEntry>> {
        let embedder = Arc::clone(&self.embedder);
        let question = question.to_string();
        let embedding = tokio::task::spawn_blocking(move || embedder.embed(&question))
            .await
            .map_err(|e| Error::Internal(format!("Embedding task failed: {}", e)))??;

        Ok(self.store.similarity_search(&embedding, self.top_k))
    }
}
