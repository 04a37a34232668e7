// src/lib.rs
//
// Bulk résumé intake: heterogeneous documents (PDF, Office formats, images,
// markup, tabular) are normalized to plain text, then five heuristic field
// extractors recover name, email, phone, skills and projects per document.
// Data flows one way: path -> bytes -> text -> fields -> record -> batch.

pub mod config;
pub mod document;
pub mod extract;
pub mod fields;
pub mod ner;
pub mod pipeline;
pub mod record;
pub mod storage;
pub mod utils;

pub use config::PipelineConfig;
pub use document::DocumentKind;
pub use pipeline::{BatchOrchestrator, RecordAssembler};
pub use record::CandidateRecord;
