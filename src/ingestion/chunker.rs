//! Recursive text chunking with overlap

use crate::types::document::{Chunk, ChunkSource, Page};

/// Boundary preference order: paragraph, line, sentence, word.
const SEPARATORS: &[&str] = &["\n\n", "\n", ". ", " "];

/// Splits text into segments of at most `chunk_size` characters, cutting on
/// the largest boundary available and carrying `overlap` characters from each
/// chunk into the next.
pub struct TextChunker {
    chunk_size: usize,
    overlap: usize,
}

impl TextChunker {
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        // Overlap must leave room for forward progress.
        let overlap = overlap.min(chunk_size - 1);
        Self {
            chunk_size,
            overlap,
        }
    }

    /// Chunk every page, tagging each chunk with its page's source metadata.
    /// Pages with empty text contribute nothing.
    pub fn chunk_pages(&self, pages: &[Page]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        for page in pages {
            for content in self.split(&page.text) {
                chunks.push(Chunk {
                    content,
                    source: ChunkSource {
                        source: page.source.clone(),
                        page: page.number,
                    },
                });
            }
        }
        chunks
    }

    /// Split text into chunks of at most `chunk_size` characters. Each chunk
    /// after the first starts `overlap` characters before the previous chunk
    /// ended.
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        // Byte offsets of every char boundary, including the end.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let total = bounds.len() - 1;

        if total <= self.chunk_size {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::new();
        let mut start = 0usize;
        loop {
            let window_end = (start + self.chunk_size).min(total);
            let end = if window_end == total {
                total
            } else {
                self.break_point(text, &bounds, start, window_end)
            };

            chunks.push(text[bounds[start]..bounds[end]].to_string());

            if end == total {
                break;
            }
            start = end - self.overlap;
        }
        chunks
    }

    /// Pick a cut position within `(start, window_end]`, in char indices.
    /// Prefers the last occurrence of each separator in turn, cutting just
    /// after it; falls back to a raw cut at the window edge. A separator is
    /// only taken if it leaves the next chunk's start past the current one.
    fn break_point(
        &self,
        text: &str,
        bounds: &[usize],
        start: usize,
        window_end: usize,
    ) -> usize {
        let window = &text[bounds[start]..bounds[window_end]];
        for sep in SEPARATORS {
            if let Some(pos) = window.rfind(sep) {
                let cut = bounds[start] + pos + sep.len();
                let end = match bounds.binary_search(&cut) {
                    Ok(i) | Err(i) => i,
                };
                if end > start + self.overlap {
                    return end;
                }
            }
        }
        window_end
    }
}
