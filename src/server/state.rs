//! Shared application state

use std::sync::Arc;

use crate::config::RagConfig;
use crate::embeddings::OnnxEmbedder;
use crate::error::Result;
use crate::generation::GeminiClient;
use crate::retrieval::store::VectorStore;
use crate::retrieval::Retriever;

/// Process-wide state handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RagConfig,
    embedder: Arc<OnnxEmbedder>,
    store: Arc<VectorStore>,
    llm: GeminiClient,
}

impl AppState {
    /// Build all components eagerly. An embedder or store failure is fatal
    /// here, before the listener binds; there is no lazy path.
    pub async fn new(config: RagConfig) -> Result<Self> {
        let embedder = Arc::new(OnnxEmbedder::load(&config.embedding).await?);

        let store = Arc::new(VectorStore::open(&config.vector_store.dir)?);
        tracing::info!(
            "Vector store opened at {} ({} entries)",
            config.vector_store.dir.display(),
            store.len()
        );

        let llm = GeminiClient::new(&config.llm);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                embedder,
                store,
                llm,
            }),
        })
    }

    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    pub fn embedder(&self) -> &Arc<OnnxEmbedder> {
        &self.inner.embedder
    }

    pub fn store(&self) -> &Arc<VectorStore> {
        &self.inner.store
    }

    pub fn llm(&self) -> &GeminiClient {
        &self.inner.llm
    }

    pub fn retriever(&self) -> Retriever {
        Retriever::new(
            Arc::clone(&self.inner.embedder),
            Arc::clone(&self.inner.store),
            self.inner.config.vector_store.top_k,
        )
    }
}
