// src/document.rs

use std::path::Path;

/// Supported document kinds, inferred from the file extension.
///
/// One variant per supported format; adding a format means adding a variant
/// here and a handler arm in `extract::extract_text`. Unknown extensions map
/// to `None` and the batch orchestrator does the skip-and-log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Doc,
    Rtf,
    Odt,
    Pptx,
    PlainText,
    Image,
    Html,
    Csv,
    Json,
}

impl DocumentKind {
    /// Maps a file path to a supported kind via its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        Self::from_extension(&ext)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::Doc),
            "rtf" => Some(Self::Rtf),
            "odt" => Some(Self::Odt),
            "pptx" => Some(Self::Pptx),
            "txt" => Some(Self::PlainText),
            "jpg" | "jpeg" | "png" | "bmp" | "tiff" | "webp" => Some(Self::Image),
            "html" => Some(Self::Html),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
