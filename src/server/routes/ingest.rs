//! Document ingestion endpoint

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::ingestion::{PdfLoader, TextChunker};
use crate::retrieval::store::IndexEntry;
use crate::server::state::AppState;
use crate::types::response::IngestResponse;

/// POST /ingest - upload a PDF and index its chunks
pub async fn ingest_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<IngestResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Internal(format!("Failed to read multipart field: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };
        // Citations carry the basename only, whatever the client sent.
        let source = Path::new(&filename)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.pdf")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::Internal(format!("Failed to read upload: {}", e)))?;

        tracing::info!("Ingesting upload: {} ({} bytes)", source, data.len());

        // Spool to a temp file; deleted on drop.
        let mut temp = tempfile::NamedTempFile::new()?;
        temp.write_all(&data)?;

        let chunks = ingest_path(&state, temp.path(), &source).await?;
        return Ok(Json(IngestResponse::success(chunks)));
    }

    Err(Error::Internal(
        "No file field in multipart upload".to_string(),
    ))
}

/// Run the full pipeline for a PDF on disk: load, chunk, embed, store.
/// Returns the number of chunks added; zero for documents with no
/// extractable text, in which case nothing is written.
pub async fn ingest_path(state: &AppState, path: &Path, source: &str) -> Result<usize> {
    let pages = PdfLoader::load(path, source)?;

    let chunking = &state.config().chunking;
    let chunker = TextChunker::new(chunking.chunk_size, chunking.chunk_overlap);
    let chunks = chunker.chunk_pages(&pages);

    if chunks.is_empty() {
        tracing::info!("No extractable text in {}, nothing to index", source);
        return Ok(0);
    }

    let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
    let embedder = Arc::clone(state.embedder());
    let embeddings = tokio::task::spawn_blocking(move || embedder.embed_batch(&texts))
        .await
        .map_err(|e| Error::Internal(format!("Embedding task failed: {}", e)))??;

    let entries: Vec<IndexEntry> = chunks
        .into_iter()
        .zip(embeddings)
        .map(|(chunk, embedding)| IndexEntry {
            id: Uuid::new_v4(),
            embedding,
            text: chunk.content,
            source: chunk.source,
        })
        .collect();

    let count = entries.len();
    let store = Arc::clone(state.store());
    tokio::task::spawn_blocking(move || store.add_and_persist(entries))
        .await
        .map_err(|e| Error::Internal(format!("Store task failed: {}", e)))??;

    tracing::info!("Indexed {} chunks from {}", count, source);

    Ok(count)
}
