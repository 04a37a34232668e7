// src/extract/mod.rs
//
// Text Extractors: one handler per document kind, dispatched on the inferred
// `DocumentKind`. Handlers return Result internally; this boundary collapses
// any failure to empty text so a single malformed file never aborts a batch.

pub mod doc;
pub mod image;
pub mod markup;
pub mod office;
pub mod pdf;
pub mod tabular;

use crate::config::PipelineConfig;
use crate::document::DocumentKind;
use crate::utils::error::ExtractError;
use self::image::OcrEngine;
use std::path::Path;

pub use self::image::TesseractOcr;

/// Converts one document into normalized plain text.
///
/// Always returns a string, possibly empty: extraction failures are logged
/// and degrade to `""` rather than propagating, so the field heuristics never
/// see an absence.
pub fn extract_text(
    path: &Path,
    kind: DocumentKind,
    config: &PipelineConfig,
    ocr: &dyn OcrEngine,
) -> String {
    match try_extract(path, kind, config, ocr) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Extraction error ({}): {}", path.display(), e);
            String::new()
        }
    }
}

fn try_extract(
    path: &Path,
    kind: DocumentKind,
    config: &PipelineConfig,
    ocr: &dyn OcrEngine,
) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => pdf::extract_pdf(path, config, ocr),
        DocumentKind::Docx => office::extract_docx(path),
        DocumentKind::Doc => doc::extract_doc(path, config),
        DocumentKind::Rtf => markup::extract_rtf(path),
        DocumentKind::Odt => office::extract_odt(path),
        DocumentKind::Pptx => office::extract_pptx(path),
        DocumentKind::PlainText => extract_plain_text(path),
        DocumentKind::Image => image::extract_image(path, ocr),
        DocumentKind::Html => markup::extract_html(path),
        DocumentKind::Csv => tabular::extract_csv(path),
        DocumentKind::Json => tabular::extract_json(path),
    }
}

/// Plain text: raw bytes decoded as UTF-8, undecodable sequences dropped.
fn extract_plain_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes)
        .chars()
        .filter(|&c| c != '\u{FFFD}')
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct NoOcr;
    impl OcrEngine for NoOcr {
        fn recognize(&self, _image_bytes: &[u8]) -> Result<String, ExtractError> {
            Err(ExtractError::Ocr("disabled in tests".to_string()))
        }
    }

    #[test]
    fn test_plain_text_drops_undecodable_bytes() {
        let mut file = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        file.write_all(b"John \xff\xfe Smith").unwrap();
        let text = extract_plain_text(file.path()).unwrap();
        assert_eq!(text, "John  Smith");
    }

    #[test]
    fn test_extract_text_degrades_to_empty_on_failure() {
        // A supported kind pointed at garbage must yield "", not an error.
        let mut file = tempfile::NamedTempFile::with_suffix(".docx").unwrap();
        file.write_all(b"this is not a zip archive").unwrap();
        let config = PipelineConfig::default();
        let text = extract_text(file.path(), DocumentKind::Docx, &config, &NoOcr);
        assert_eq!(text, "");
    }

    #[test]
    fn test_extract_text_missing_file_degrades_to_empty() {
        let config = PipelineConfig::default();
        let text = extract_text(
            Path::new("/nonexistent/resume.txt"),
            DocumentKind::PlainText,
            &config,
            &NoOcr,
        );
        assert_eq!(text, "");
    }
}
