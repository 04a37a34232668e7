// src/extract/pdf.rs

use crate::config::PipelineConfig;
use crate::extract::image::OcrEngine;
use crate::utils::error::ExtractError;
use std::path::Path;
use std::process::Command;

/// Extracts PDF text: embedded text first, OCR fallback for scanned documents.
///
/// The embedded pass concatenates per-page text with newlines. If the trimmed
/// result is shorter than `min_embedded_text` the document is assumed to be a
/// scan: every page is rendered to an image with the configured renderer and
/// run through OCR, results concatenated.
pub fn extract_pdf(
    path: &Path,
    config: &PipelineConfig,
    ocr: &dyn OcrEngine,
) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;

    // A broken embedded-text layer is not fatal; the OCR pass still runs.
    let text = match pdf_extract::extract_text_from_mem(&bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Embedded text extraction failed for {}: {}", path.display(), e);
            String::new()
        }
    };

    if text.trim().len() >= config.min_embedded_text {
        return Ok(text);
    }

    tracing::info!("OCR running for scanned PDF: {}", path.display());
    ocr_pages(path, config, ocr)
}

/// Renders every page to PNG in a scratch directory and OCRs each in page
/// order.
fn ocr_pages(
    path: &Path,
    config: &PipelineConfig,
    ocr: &dyn OcrEngine,
) -> Result<String, ExtractError> {
    let scratch = tempfile::tempdir()?;
    let prefix = scratch.path().join("page");

    let output = Command::new(&config.pdf_renderer_cmd)
        .arg("-png")
        .arg("-r")
        .arg("200")
        .arg(path)
        .arg(&prefix)
        .output()
        .map_err(|e| ExtractError::Converter {
            command: config.pdf_renderer_cmd.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(ExtractError::Converter {
            command: config.pdf_renderer_cmd.clone(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    // pdftoppm names pages page-1.png, page-2.png, ... (zero-padded for
    // larger documents), so a lexicographic sort keeps page order.
    let mut pages: Vec<_> = std::fs::read_dir(scratch.path())?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().map(|e| e == "png").unwrap_or(false))
        .collect();
    pages.sort();

    let mut text = String::new();
    for page in &pages {
        let bytes = std::fs::read(page)?;
        match ocr.recognize(&bytes) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => tracing::warn!("OCR failed on {}: {}", page.display(), e),
        }
    }

    Ok(text)
}
