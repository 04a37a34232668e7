// src/extract/image.rs

use crate::utils::error::ExtractError;
use std::path::Path;

/// Optical character recognition, consumed as a black-box `image -> text`
/// capability. The default implementation shells out to tesseract; tests
/// substitute canned engines.
pub trait OcrEngine: Send + Sync {
    /// Runs OCR over encoded image bytes (png/jpeg/bmp/tiff/webp).
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, ExtractError>;
}

/// OCR via the tesseract binary, wrapped by rusty-tesseract.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    lang: String,
}

impl TesseractOcr {
    pub fn new(lang: &str) -> Self {
        Self { lang: lang.to_string() }
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, ExtractError> {
        let img = image::load_from_memory(image_bytes)
            .map_err(|e| ExtractError::Ocr(format!("image decode failed: {}", e)))?;

        // Tesseract does best on grayscale input
        let luma = img.to_luma8();
        let tess_image =
            rusty_tesseract::Image::from_dynamic_image(&image::DynamicImage::ImageLuma8(luma))
                .map_err(|e| ExtractError::Ocr(format!("image conversion failed: {}", e)))?;

        let mut args = rusty_tesseract::Args::default();
        args.lang = self.lang.clone();

        rusty_tesseract::image_to_string(&tess_image, &args)
            .map_err(|e| ExtractError::Ocr(format!("tesseract failed: {}", e)))
    }
}

/// Image documents go straight through OCR.
pub fn extract_image(path: &Path, ocr: &dyn OcrEngine) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    ocr.recognize(&bytes)
}
