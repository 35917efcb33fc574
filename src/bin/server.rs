//! RAG server binary

use std::path::Path;

use doc_rag::{config::RagConfig, server::RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_FILE: &str = "doc-rag.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_rag=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = if Path::new(CONFIG_FILE).exists() {
        tracing::info!("Loading configuration from {}", CONFIG_FILE);
        RagConfig::from_file(Path::new(CONFIG_FILE))?
    } else {
        RagConfig::default()
    };

    tracing::info!("Configuration:");
    tracing::info!(
        "  - Embedding model: {} ({} dims)",
        config.embedding.model,
        config.embedding.dimensions
    );
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!(
        "  - Chunking: {} chars, {} overlap",
        config.chunking.chunk_size,
        config.chunking.chunk_overlap
    );
    tracing::info!("  - Vector store: {}", config.vector_store.dir.display());
    tracing::info!("  - Data directory: {}", config.ingest.data_dir.display());

    let server = RagServer::new(config).await?;
    tracing::info!("API: http://{}", server.address());

    server.start().await?;

    Ok(())
}
