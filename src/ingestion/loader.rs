//! PDF loading with per-page text extraction

use std::path::Path;

use lopdf::Document;

use crate::error::{Error, Result};
use crate::types::document::Page;

/// Extracts text from PDF files one page at a time, so chunks keep the page
/// number they came from.
pub struct PdfLoader;

impl PdfLoader {
    /// Load `path` and return one [`Page`] per PDF page, in page order.
    ///
    /// Page numbers are carried through exactly as the PDF library emits
    /// them (1-based). Pages that extract to no text still appear, with an
    /// empty `text`; the chunker drops them later.
    pub fn load(path: &Path, source: &str) -> Result<Vec<Page>> {
        let doc = Document::load(path)
            .map_err(|e| Error::file_parse(source, format!("failed to load PDF: {}", e)))?;

        let mut pages = Vec::new();
        for &number in doc.get_pages().keys() {
            let raw = doc.extract_text(&[number]).unwrap_or_default();
            pages.push(Page {
                number,
                text: cleanup_text(&raw),
                source: source.to_string(),
            });
        }

        Ok(pages)
    }
}

/// Strip NUL bytes and blank lines left behind by PDF text extraction.
fn cleanup_text(text: &str) -> String {
    text.replace('\0', "")
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}


#[cfg(test)]
mod tests {
    use super::test_support::write_single_page_pdf;
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_text_with_page_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.pdf");
        write_single_page_pdf(&path, "Hello World");

        let pages = PdfLoader::load(&path, "hello.pdf").unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].source, "hello.pdf");
        assert!(pages[0].text.contains("Hello World"));
    }

    #[test]
    fn rejects_non_pdf_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let err = PdfLoader::load(file.path(), "junk.pdf").unwrap_err();
        assert!(err.to_string().contains("junk.pdf"));
    }

    #[test]
    fn rejects_missing_file() {
        assert!(PdfLoader::load(Path::new("/nonexistent/x.pdf"), "x.pdf").is_err());
    }

    #[test]
    fn cleanup_drops_nuls_and_blank_lines() {
        let cleaned = cleanup_text("  first\0 line  \n\n\n  second  \n");
        assert_eq!(cleaned, "first line\nsecond");
    }
}
