// src/config.rs

use phonenumber::country;

/// Pipeline-wide configuration, built once at startup from CLI arguments and
/// passed read-only into the extraction components. External tool paths live
/// here rather than as module-level constants so they stay overridable.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Region assumed when parsing phone numbers without a country prefix.
    pub phone_region: country::Id,
    /// Language passed to tesseract for OCR.
    pub ocr_lang: String,
    /// Command used to render PDF pages to images for the OCR fallback
    /// (poppler's pdftoppm by default).
    pub pdf_renderer_cmd: String,
    /// Command used to pull plain text out of legacy binary .doc files.
    pub doc_converter_cmd: String,
    /// Embedded PDF text shorter than this (after trimming) is treated as a
    /// scanned document and sent through the OCR fallback.
    pub min_embedded_text: usize,
    /// Maximum number of files extracted concurrently.
    pub max_concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            phone_region: country::Id::IN,
            ocr_lang: "eng".to_string(),
            pdf_renderer_cmd: "pdftoppm".to_string(),
            doc_converter_cmd: "antiword".to_string(),
            min_embedded_text: 20,
            max_concurrency: 4,
        }
    }
}
