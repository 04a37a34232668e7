// src/extract/tabular.rs
//
// CSV and JSON inputs are rendered to flat text so the field heuristics can
// run over them like any other document.

use crate::utils::error::ExtractError;
use std::path::Path;

/// CSV: every row flattened to one line, cells joined with " | ".
pub fn extract_csv(path: &Path) -> Result<String, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record?;
        lines.push(record.iter().collect::<Vec<_>>().join(" | "));
    }

    Ok(lines.join("\n"))
}

/// JSON: parsed and re-serialized with indentation, so nested values end up
/// on their own lines.
pub fn extract_json(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
