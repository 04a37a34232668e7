// src/storage/mod.rs
//
// Downstream persistence is an external collaborator; this crate's only
// obligation is the five parallel tables keyed by file. They are written as
// CSV files plus a small batch metadata JSON.

use crate::record::CandidateRecord;
use crate::utils::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Writes the five per-field tables: (file, name), (file, email),
    /// (file, phone), (file, skill) one row per skill, (file, project) one
    /// row per project. Returns the written paths.
    pub fn save_tables(&self, records: &[CandidateRecord]) -> Result<Vec<PathBuf>, StorageError> {
        let mut written = Vec::new();

        written.push(self.write_table("name.csv", "name", records, |r| {
            vec![r.name.clone()]
        })?);
        written.push(self.write_table("email.csv", "email", records, |r| {
            vec![r.email.clone()]
        })?);
        written.push(self.write_table("phone.csv", "phone", records, |r| {
            vec![r.phone.clone()]
        })?);
        written.push(self.write_table("skills.csv", "skill", records, |r| r.skills.clone())?);
        written.push(self.write_table("projects.csv", "project", records, |r| {
            r.projects.clone()
        })?);

        Ok(written)
    }

    fn write_table(
        &self,
        filename: &str,
        column: &str,
        records: &[CandidateRecord],
        values: impl Fn(&CandidateRecord) -> Vec<String>,
    ) -> Result<PathBuf, StorageError> {
        let path = self.base_dir.join(filename);
        let mut writer = csv::Writer::from_path(&path)?;

        writer.write_record(["file", column])?;
        for record in records {
            for value in values(record) {
                writer.write_record([record.file.as_str(), value.as_str()])?;
            }
        }
        writer.flush().map_err(StorageError::IoError)?;

        tracing::info!("Saved table to {}", path.display());
        Ok(path)
    }

    /// Saves metadata about the batch in JSON format
    pub fn save_batch_metadata(
        &self,
        records: &[CandidateRecord],
        skipped: usize,
    ) -> Result<PathBuf, StorageError> {
        let path = self.base_dir.join("batch_meta.json");

        let metadata = serde_json::json!({
            "record_count": records.len(),
            "skipped_files": skipped,
            "files": records.iter().map(|r| r.file.as_str()).collect::<Vec<_>>(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(file: &str) -> CandidateRecord {
        CandidateRecord {
            file: file.to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+919876543210".to_string(),
            skills: vec!["Python".to_string(), "Aws".to_string()],
            projects: vec!["NA".to_string()],
        }
    }

    #[test]
    fn test_tables_written_one_row_per_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let paths = storage.save_tables(&[sample_record("jane.pdf")]).unwrap();
        assert_eq!(paths.len(), 5);

        let skills = fs::read_to_string(dir.path().join("skills.csv")).unwrap();
        let mut lines = skills.lines();
        assert_eq!(lines.next(), Some("file,skill"));
        assert_eq!(lines.next(), Some("jane.pdf,Python"));
        assert_eq!(lines.next(), Some("jane.pdf,Aws"));

        let names = fs::read_to_string(dir.path().join("name.csv")).unwrap();
        assert!(names.contains("jane.pdf,Jane Doe"));
    }

    #[test]
    fn test_batch_metadata_contents() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let path = storage
            .save_batch_metadata(&[sample_record("jane.pdf")], 2)
            .unwrap();
        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(meta["record_count"], 1);
        assert_eq!(meta["skipped_files"], 2);
        assert_eq!(meta["files"][0], "jane.pdf");
    }
}
