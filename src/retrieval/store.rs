//! Persistent vector store with brute-force cosine search
//!
//! The on-disk format is a single JSON file inside the store directory and
//! is internal to this module. Nothing is ever deduplicated or deleted:
//! re-adding the same chunk stores it twice.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::types::document::ChunkSource;

const ENTRIES_FILE: &str = "entries.json";

/// One persisted (embedding, text, origin) record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: Uuid,
    pub embedding: Vec<f32>,
    pub text: String,
    pub source: ChunkSource,
}

/// A search hit with its cosine similarity to the query.
#[derive(Debug, Clone)]
pub struct ScoredEntry {
    pub entry: IndexEntry,
    pub similarity: f32,
}

#[derive(Debug)]
pub struct VectorStore {
    dir: PathBuf,
    entries: RwLock<Vec<IndexEntry>>,
}

impl VectorStore {
    /// Open the store at `dir`, creating the directory if needed and loading
    /// any persisted entries.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;

        let path = dir.join(ENTRIES_FILE);
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                Error::VectorStore(format!("corrupt index file {}: {}", path.display(), e))
            })?
        } else {
            Vec::new()
        };

        Ok(Self {
            dir: dir.to_path_buf(),
            entries: RwLock::new(entries),
        })
    }

    /// Append entries in memory only. Not durable until [`persist`] runs.
    ///
    /// [`persist`]: VectorStore::persist
    pub fn add(&self, new: Vec<IndexEntry>) {
        self.entries.write().extend(new);
    }

    /// Write the full entry set to disk.
    pub fn persist(&self) -> Result<()> {
        let entries = self.entries.read();
        self.write_entries(&entries)
    }

    /// Append and persist under a single write lock, so concurrent ingests
    /// serialize at file granularity.
    pub fn add_and_persist(&self, new: Vec<IndexEntry>) -> Result<()> {
        let mut entries = self.entries.write();
        entries.extend(new);
        self.write_entries(&entries)
    }

    /// Write to a temp file in the store directory and rename it over the
    /// index, so an interrupted write never truncates previously persisted
    /// entries.
    fn write_entries(&self, entries: &[IndexEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(self.dir.join(ENTRIES_FILE))
            .map_err(|e| Error::VectorStore(format!("failed to replace index file: {}", e)))?;

        Ok(())
    }

    /// Return up to `limit` entries, in insertion order. `get(1)` is the
    /// cheap emptiness probe used at startup.
    pub fn get(&self, limit: usize) -> Vec<IndexEntry> {
        self.entries.read().iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Top-`k` entries by cosine similarity, descending. Returns fewer than
    /// `k` when the store holds fewer entries; never an error.
    pub fn similarity_search(&self, query: &[f32], k: usize) -> Vec<ScoredEntry> {
        let entries = self.entries.read();

        let mut scored: Vec<ScoredEntry> = entries
            .iter()
            .map(|entry| ScoredEntry {
                similarity: cosine_similarity(query, &entry.embedding),
                entry: entry.clone(),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k);
        scored
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, embedding: Vec<f32>) -> IndexEntry {
        IndexEntry {
            id: Uuid::new_v4(),
            embedding,
            text: text.to_string(),
            source: ChunkSource {
                source: "doc.pdf".to_string(),
                page: 1,
            },
        }
    }

    #[test]
    fn open_on_empty_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = VectorStore::open(dir.path()).unwrap();
        assert!(store.is_empty());
        assert!(store.get(1).is_empty());
    }

    #[test]
    fn add_and_persist_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = VectorStore::open(dir.path()).unwrap();
        store
            .add_and_persist(vec![
                entry("alpha", vec![1.0, 0.0]),
                entry("beta", vec![0.0, 1.0]),
            ])
            .unwrap();
        drop(store);

        let reopened = VectorStore::open(dir.path()).unwrap();
        assert_eq!(reopened.len(), 2);
        let texts: Vec<String> = reopened.get(10).into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn repeated_persists_replace_the_index_cleanly() {
        let dir = tempfile::tempdir().unwrap();

        let store = VectorStore::open(dir.path()).unwrap();
        store
            .add_and_persist(vec![entry("one", vec![1.0, 0.0])])
            .unwrap();
        store
            .add_and_persist(vec![entry("two", vec![0.0, 1.0])])
            .unwrap();
        drop(store);

        // Only the index file itself remains; no temp files leak.
        let files: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(files, vec![ENTRIES_FILE.to_string()]);

        let reopened = VectorStore::open(dir.path()).unwrap();
        assert_eq!(reopened.len(), 2);
    }

    #[test]
    fn add_without_persist_is_not_durable() {
        let dir = tempfile::tempdir().unwrap();

        let store = VectorStore::open(dir.path()).unwrap();
        store.add(vec![entry("ephemeral", vec![1.0])]);
        assert_eq!(store.len(), 1);
        drop(store);

        let reopened = VectorStore::open(dir.path()).unwrap();
        assert!(reopened.is_empty());
    }

    #[test]
    fn search_orders_by_similarity() {
        let dir = tempfile::tempdir().unwrap();
        let store = VectorStore::open(dir.path()).unwrap();
        store.add(vec![
            entry("orthogonal", vec![0.0, 1.0]),
            entry("aligned", vec![1.0, 0.0]),
            entry("diagonal", vec![1.0, 1.0]),
        ]);

        let results = store.similarity_search(&[1.0, 0.0], 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].entry.text, "aligned");
        assert!((results[0].similarity - 1.0).abs() < 1e-6);
        assert_eq!(results[1].entry.text, "diagonal");
    }

    #[test]
    fn search_returns_fewer_than_k_on_small_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = VectorStore::open(dir.path()).unwrap();
        store.add(vec![entry("only", vec![1.0, 0.0])]);

        let results = store.similarity_search(&[1.0, 0.0], 5);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn search_on_empty_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = VectorStore::open(dir.path()).unwrap();
        assert!(store.similarity_search(&[1.0], 5).is_empty());
    }

    #[test]
    fn duplicate_adds_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let store = VectorStore::open(dir.path()).unwrap();
        store.add(vec![entry("same", vec![1.0])]);
        store.add(vec![entry("same", vec![1.0])]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn corrupt_index_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ENTRIES_FILE), "{ not json").unwrap();

        let err = VectorStore::open(dir.path()).unwrap_err();
        assert!(err.to_string().contains("corrupt index file"));
    }

    #[test]
    fn cosine_similarity_basics() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}
