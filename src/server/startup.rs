//! One-time startup auto-ingestion

use std::future::Future;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::server::routes::ingest::ingest_path;
use crate::server::state::AppState;

/// If the store is empty, ingest every PDF found in the configured data
/// directory. Runs once, before the listener binds.
pub async fn auto_ingest(state: &AppState) {
    if !state.store().get(1).is_empty() {
        tracing::info!("Vector store already populated, skipping auto-ingestion");
        return;
    }

    let data_dir = state.config().ingest.data_dir.clone();
    if !data_dir.exists() {
        tracing::info!(
            "No data directory at {}, waiting for uploads",
            data_dir.display()
        );
        return;
    }

    tracing::info!(
        "Store is empty, auto-ingesting PDFs from {}",
        data_dir.display()
    );

    let indexed = ingest_directory(&data_dir, |path, source| async move {
        ingest_path(state, &path, &source).await
    })
    .await;

    if indexed == 0 {
        tracing::info!("No PDFs found in {}", data_dir.display());
    } else {
        tracing::info!("Auto-ingestion complete ({} files)", indexed);
    }
}

/// Run `ingest` on every PDF at the top level of `data_dir` (subdirectories
/// are not descended into). Each file is handled independently: failures are
/// logged and skipped so one bad file never aborts the batch. Returns the
/// number of files ingested successfully.
async fn ingest_directory<F, Fut>(data_dir: &Path, mut ingest: F) -> usize
where
    F: FnMut(PathBuf, String) -> Fut,
    Fut: Future<Output = Result<usize>>,
{
    let mut indexed = 0usize;
    for entry in WalkDir::new(data_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_pdf = path.is_file()
            && path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false);
        if !is_pdf {
            continue;
        }

        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();

        match ingest(path.to_path_buf(), source.clone()).await {
            Ok(chunks) => {
                tracing::info!("Auto-ingested {} ({} chunks)", source, chunks);
                indexed += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to ingest {}: {}", path.display(), e);
            }
        }
    }
    indexed
}
