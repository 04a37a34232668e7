// src/pipeline.rs
//
// Record Assembler and Batch Orchestrator. The assembler never fails: text
// extraction and every field heuristic degrade to sentinels. The orchestrator
// filters out unsupported kinds, runs independent files concurrently on a
// bounded pool, and returns records in input order.

use crate::config::PipelineConfig;
use crate::document::DocumentKind;
use crate::extract::image::OcrEngine;
use crate::fields;
use crate::ner::EntityTagger;
use crate::record::CandidateRecord;
use crate::{extract, utils::AppError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Runs extraction plus all five field heuristics over one document.
pub struct RecordAssembler {
    config: PipelineConfig,
    ocr: Arc<dyn OcrEngine>,
    tagger: Arc<dyn EntityTagger>,
}

impl RecordAssembler {
    pub fn new(
        config: PipelineConfig,
        ocr: Arc<dyn OcrEngine>,
        tagger: Arc<dyn EntityTagger>,
    ) -> Self {
        Self { config, ocr, tagger }
    }

    /// Produces one CandidateRecord for a supported file. Never fails;
    /// extraction errors yield empty text and the heuristics fall through to
    /// their sentinels.
    pub fn assemble(&self, path: &Path, kind: DocumentKind) -> CandidateRecord {
        let file = file_key(path);
        let text = extract::extract_text(path, kind, &self.config, self.ocr.as_ref());

        CandidateRecord {
            file,
            name: fields::extract_name(&text, self.tagger.as_ref()),
            email: fields::extract_email(&text),
            phone: fields::extract_phone(&text, self.config.phone_region),
            skills: fields::extract_skills(&text),
            projects: fields::extract_projects(&text),
        }
    }
}

/// Drives a whole batch of input paths through the assembler.
pub struct BatchOrchestrator {
    assembler: Arc<RecordAssembler>,
    max_concurrency: usize,
}

impl BatchOrchestrator {
    pub fn new(assembler: RecordAssembler) -> Self {
        let max_concurrency = assembler.config.max_concurrency.max(1);
        Self {
            assembler: Arc::new(assembler),
            max_concurrency,
        }
    }

    /// Processes every supported file in `paths`, skipping (and logging)
    /// unsupported extensions. One record per supported file, in input order;
    /// a file that cannot be processed still yields a record, with sentinel
    /// fields. Files run concurrently on a bounded pool, but ordering and
    /// per-file isolation match the sequential contract.
    pub async fn process_batch(&self, paths: &[PathBuf]) -> Result<Vec<CandidateRecord>, AppError> {
        // Filter first so slot indices line up with output positions
        let supported: Vec<(PathBuf, DocumentKind)> = paths
            .iter()
            .filter_map(|path| match DocumentKind::from_path(path) {
                Some(kind) => Some((path.clone(), kind)),
                None => {
                    tracing::info!("Skipping unsupported file: {}", path.display());
                    None
                }
            })
            .collect();

        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = JoinSet::new();

        for (index, (path, kind)) in supported.iter().cloned().enumerate() {
            let assembler = Arc::clone(&self.assembler);
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let _permit = semaphore.acquire().await;
                tracing::info!("Processing: {}", path.display());
                // Extraction (parsers, OCR subprocesses) is blocking work
                let record =
                    tokio::task::spawn_blocking(move || assembler.assemble(&path, kind)).await;
                (index, record)
            });
        }

        let mut slots: Vec<Option<CandidateRecord>> = vec![None; supported.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(record))) => slots[index] = Some(record),
                Ok((index, Err(e))) => {
                    // A panicking extractor isolates to its file
                    tracing::error!(
                        "Extraction task for {} failed: {}",
                        supported[index].0.display(),
                        e
                    );
                    slots[index] = Some(CandidateRecord::unknown(&file_key(&supported[index].0)));
                }
                Err(e) => return Err(AppError::Processing(format!("task join failed: {}", e))),
            }
        }

        let records = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| CandidateRecord::unknown(&file_key(&supported[index].0)))
            })
            .collect();

        Ok(records)
    }
}

fn file_key(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::HeuristicTagger;
    use crate::utils::error::ExtractError;
    use std::io::Write;

    struct NoOcr;
    impl OcrEngine for NoOcr {
        fn recognize(&self, _image_bytes: &[u8]) -> Result<String, ExtractError> {
            Err(ExtractError::Ocr("disabled in tests".to_string()))
        }
    }

    fn orchestrator() -> BatchOrchestrator {
        let assembler = RecordAssembler::new(
            PipelineConfig::default(),
            Arc::new(NoOcr),
            Arc::new(HeuristicTagger::new()),
        );
        BatchOrchestrator::new(assembler)
    }

    fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_assembler_populates_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "jane.txt",
            "Name: Jane Doe\njane@example.com\n+91 98765 43210\nSkills: Python, AWS\nProjects\nBuilt a thing that parses\nEducation\n",
        );

        let assembler = RecordAssembler::new(
            PipelineConfig::default(),
            Arc::new(NoOcr),
            Arc::new(HeuristicTagger::new()),
        );
        let record = assembler.assemble(&path, DocumentKind::PlainText);

        assert_eq!(record.file, "jane.txt");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@example.com");
        assert_eq!(record.phone, "+919876543210");
        assert!(record.skills.contains(&"Python".to_string()));
        assert_eq!(record.projects, vec!["Built a thing that parses".to_string()]);
    }

    #[tokio::test]
    async fn test_batch_skips_unsupported_and_keeps_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(dir.path(), "a.txt", "Name: Anna Smith\n");
        let skipped = write_fixture(dir.path(), "b.exe", "binary");
        let c = write_fixture(dir.path(), "c.txt", "Name: Carl Jones\n");

        let records = orchestrator()
            .process_batch(&[a, skipped, c])
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].file, "a.txt");
        assert_eq!(records[0].name, "Anna Smith");
        assert_eq!(records[1].file, "c.txt");
        assert_eq!(records[1].name, "Carl Jones");
    }

    #[tokio::test]
    async fn test_malformed_supported_file_degrades_to_sentinels() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_fixture(dir.path(), "broken.docx", "not a zip archive");

        let records = orchestrator().process_batch(&[bad]).await.unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "NA");
        assert_eq!(record.email, "NA");
        assert_eq!(record.phone, "NA");
        assert_eq!(record.skills, vec!["NA".to_string()]);
        assert_eq!(record.projects, vec!["NA".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_batch_yields_no_records() {
        let records = orchestrator().process_batch(&[]).await.unwrap();
        assert!(records.is_empty());
    }
}
