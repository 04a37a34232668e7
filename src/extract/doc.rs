// src/extract/doc.rs

use crate::config::PipelineConfig;
use crate::utils::error::ExtractError;
use std::path::Path;
use std::process::Command;

/// Legacy binary .doc: delegated to an external converter (antiword by
/// default). No Rust crate reads the OLE2 Word text stream, so the converter
/// is consumed as a black-box capability like OCR; its stdout is the text.
pub fn extract_doc(path: &Path, config: &PipelineConfig) -> Result<String, ExtractError> {
    let output = Command::new(&config.doc_converter_cmd)
        .arg(path)
        .output()
        .map_err(|e| ExtractError::Converter {
            command: config.doc_converter_cmd.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(ExtractError::Converter {
            command: config.doc_converter_cmd.clone(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
