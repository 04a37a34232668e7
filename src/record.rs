// src/record.rs

use crate::fields::NA;
use serde::{Deserialize, Serialize};

/// Structured output for one input document.
///
/// Invariants: `name`, `email`, `phone` are always present ("NA" when
/// unknown); `skills` and `projects` are never empty (a single "NA" element
/// when unknown). Callers never need to special-case emptiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Original filename, the batch-level key.
    pub file: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
}

impl CandidateRecord {
    /// A record whose every field is the sentinel, used when a file could not
    /// be processed at all.
    pub fn unknown(file: &str) -> Self {
        Self {
            file: file.to_string(),
            name: NA.to_string(),
            email: NA.to_string(),
            phone: NA.to_string(),
            skills: vec![NA.to_string()],
            projects: vec![NA.to_string()],
        }
    }
}
