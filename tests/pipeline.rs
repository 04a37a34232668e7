// tests/pipeline.rs
//
// End-to-end batch behavior over real temp files. OCR is stubbed out; these
// tests exercise the text formats and the orchestrator contracts.

use resume_extractor::config::PipelineConfig;
use resume_extractor::extract::image::OcrEngine;
use resume_extractor::ner::HeuristicTagger;
use resume_extractor::pipeline::{BatchOrchestrator, RecordAssembler};
use resume_extractor::storage::StorageManager;
use resume_extractor::utils::error::ExtractError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

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

fn write_fixture(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

const RESUME_TXT: &str = "\
Name: Jane Doe
Email: jane.doe@example.com
Phone: +91 98765 43210
Skills: Python, React, AWS, MySQL
Projects
Resume parsing pipeline in Rust
Experience
BigCo, 2020-2024
";

#[tokio::test]
async fn batch_positions_match_supported_inputs_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let txt = write_fixture(dir.path(), "01_jane.txt", RESUME_TXT.as_bytes());
    let unsupported = write_fixture(dir.path(), "02_noise.xyz", b"whatever");
    let html = write_fixture(
        dir.path(),
        "03_bob.html",
        b"<html><body><h1>Bob Ray Martin</h1><p>bob@example.com</p></body></html>",
    );
    let unsupported2 = write_fixture(dir.path(), "04_archive.tar", b"...");

    // N inputs, M unsupported -> exactly N-M records, 1:1 and in input order
    let records = orchestrator()
        .process_batch(&[txt, unsupported, html, unsupported2])
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].file, "01_jane.txt");
    assert_eq!(records[1].file, "03_bob.html");
}

#[tokio::test]
async fn every_record_has_all_five_fields_populated() {
    let dir = tempfile::tempdir().unwrap();
    let fine = write_fixture(dir.path(), "jane.txt", RESUME_TXT.as_bytes());
    let empty = write_fixture(dir.path(), "empty.txt", b"");
    let broken = write_fixture(dir.path(), "broken.docx", b"not a zip");
    let bad_json = write_fixture(dir.path(), "bad.json", b"{ nope");

    let records = orchestrator()
        .process_batch(&[fine, empty, broken, bad_json])
        .await
        .unwrap();

    assert_eq!(records.len(), 4);
    for record in &records {
        assert!(!record.name.is_empty());
        assert!(!record.email.is_empty());
        assert!(!record.phone.is_empty());
        assert!(!record.skills.is_empty(), "skills must never be empty");
        assert!(!record.projects.is_empty(), "projects must never be empty");
    }

    // The malformed ones resolve to sentinels rather than aborting the batch
    for record in &records[1..] {
        assert_eq!(record.name, "NA");
        assert_eq!(record.skills, vec!["NA".to_string()]);
    }
}

#[tokio::test]
async fn extracted_fields_from_plain_text_resume() {
    let dir = tempfile::tempdir().unwrap();
    let txt = write_fixture(dir.path(), "jane.txt", RESUME_TXT.as_bytes());

    let records = orchestrator().process_batch(&[txt]).await.unwrap();
    let record = &records[0];

    assert_eq!(record.name, "Jane Doe");
    assert_eq!(record.email, "jane.doe@example.com");
    assert_eq!(record.phone, "+919876543210");

    let skills: std::collections::HashSet<&str> =
        record.skills.iter().map(String::as_str).collect();
    assert_eq!(
        skills,
        ["Python", "React", "Aws", "Mysql"].into_iter().collect()
    );

    assert_eq!(
        record.projects,
        vec!["Resume parsing pipeline in Rust".to_string()]
    );
}

#[tokio::test]
async fn csv_and_json_inputs_flow_through_the_heuristics() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_fixture(
        dir.path(),
        "row.csv",
        b"name,email\nName: Ada King,ada@example.com\n",
    );
    let json = write_fixture(
        dir.path(),
        "cv.json",
        br#"{"contact": "mail me at lin@example.com", "phone": "9876543210"}"#,
    );

    let records = orchestrator().process_batch(&[csv, json]).await.unwrap();

    assert_eq!(records[0].email, "ada@example.com");
    assert_eq!(records[1].email, "lin@example.com");
    assert_eq!(records[1].phone, "+919876543210");
}

#[tokio::test]
async fn batch_output_feeds_the_five_tables() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let txt = write_fixture(dir.path(), "jane.txt", RESUME_TXT.as_bytes());

    let records = orchestrator().process_batch(&[txt]).await.unwrap();
    let storage = StorageManager::new(out.path()).unwrap();
    let tables = storage.save_tables(&records).unwrap();

    assert_eq!(tables.len(), 5);
    for table in ["name.csv", "email.csv", "phone.csv", "skills.csv", "projects.csv"] {
        assert!(out.path().join(table).exists(), "{} missing", table);
    }

    let phone_table = std::fs::read_to_string(out.path().join("phone.csv")).unwrap();
    assert!(phone_table.contains("jane.txt,+919876543210"));
}
