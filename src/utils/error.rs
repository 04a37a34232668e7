// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("I/O error reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Office container error: {0}")]
    Container(String),

    #[error("XML parsing error: {0}")]
    Xml(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("External converter `{command}` failed: {reason}")]
    Converter { command: String, reason: String },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("No processable input files under {0}")]
    NoInputs(PathBuf),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Batch processing failed: {0}")]
    Processing(String),
}
