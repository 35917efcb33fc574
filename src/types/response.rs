//! Response types for the HTTP surface

use serde::{Deserialize, Serialize};

use crate::retrieval::store::IndexEntry;

/// Length of the `context` preview carried by each citation, in characters.
const CONTEXT_PREVIEW_CHARS: usize = 200;

/// A source reference returned alongside a query answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// Source file basename.
    pub source: String,
    /// Page number from the loader (1-based).
    pub page: u32,
    /// Opening of the cited chunk, truncated with an ellipsis.
    pub context: String,
}

impl Citation {
    pub fn from_entry(entry: &IndexEntry) -> Self {
        Self {
            source: entry.source.source.clone(),
            page: entry.source.page,
            context: preview(&entry.text),
        }
    }
}

/// First `CONTEXT_PREVIEW_CHARS` characters followed by an ellipsis. The
/// ellipsis is always appended, even when nothing was cut.
fn preview(text: &str) -> String {
    let truncated: String = text.chars().take(CONTEXT_PREVIEW_CHARS).collect();
    format!("{}...", truncated)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub citations: Vec<Citation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    pub status: String,
    pub chunks: usize,
}

impl IngestResponse {
    pub fn success(chunks: usize) -> Self {
        Self {
            status: "success".to_string(),
            chunks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::document::ChunkSource;
    use uuid::Uuid;

    fn entry(text: &str) -> IndexEntry {
        IndexEntry {
            id: Uuid::new_v4(),
            embedding: vec![0.0; 4],
            text: text.to_string(),
            source: ChunkSource {
                source: "manual.pdf".to_string(),
                page: 3,
            },
        }
    }

    #[test]
    fn citation_truncates_long_text_at_200_chars() {
        let text = "x".repeat(500);
        let citation = Citation::from_entry(&entry(&text));
        assert_eq!(citation.context.chars().count(), 203);
        assert!(citation.context.ends_with("..."));
        assert_eq!(citation.source, "manual.pdf");
        assert_eq!(citation.page, 3);
    }

    #[test]
    fn citation_keeps_short_text_whole_with_ellipsis() {
        let citation = Citation::from_entry(&entry("short chunk"));
        assert_eq!(citation.context, "short chunk...");
    }

    #[test]
    fn citation_truncation_respects_char_boundaries() {
        let text = "€".repeat(300);
        let citation = Citation::from_entry(&entry(&text));
        assert_eq!(citation.context.chars().count(), 203);
    }

    #[test]
    fn ingest_response_status_is_success() {
        let response = IngestResponse::success(42);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["chunks"], 42);
    }
}
