//! Loading and saving directory datasets.
//!
//! Datasets are JSON arrays:
//! - lawyers: `[{ "id": "1", "name": "...", "specialization": ..., ... }]`
//! - cases:   `[{ "id": "1", "title": "...", "outcome": "won", ... }]`
//!
//! Parsing failures are reported with the dataset name so a bad file is
//! easy to locate.

use crate::error::{DirectoryError, Result};
use crate::index::Directory;
use crate::types::{CaseRecord, LawyerRecord};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

fn parse_json<T: DeserializeOwned>(source_name: &str, content: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|e| DirectoryError::ParseError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

fn read_dataset(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

impl Directory {
    /// Load and validate a lawyer dataset from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = read_dataset(path)?;
        let directory = Self::from_json_str(&path.display().to_string(), &content)?;
        info!(
            "Loaded {} lawyers from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// Parse and validate a lawyer dataset held in memory
    pub fn from_json_str(source_name: &str, content: &str) -> Result<Self> {
        let records: Vec<LawyerRecord> = parse_json(source_name, content)?;
        Self::from_records(records)
    }

    /// Write the snapshot back as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records).map_err(|e| {
            DirectoryError::ParseError {
                source_name: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        fs::write(path, json)?;
        info!("Saved {} lawyers to {}", self.len(), path.display());
        Ok(())
    }
}

/// Load a case history dataset from a JSON file
pub fn load_cases_from_file(path: &Path) -> Result<Vec<CaseRecord>> {
    let content = read_dataset(path)?;
    let cases = cases_from_json_str(&path.display().to_string(), &content)?;
    info!("Loaded {} cases from {}", cases.len(), path.display());
    Ok(cases)
}

/// Parse a case history dataset held in memory
pub fn cases_from_json_str(source_name: &str, content: &str) -> Result<Vec<CaseRecord>> {
    let cases: Vec<CaseRecord> = parse_json(source_name, content)?;
    for case in &cases {
        if case.relevance_score > 100 {
            return Err(DirectoryError::InvalidValue {
                id: case.id.clone(),
                field: "relevance_score".to_string(),
                value: case.relevance_score.to_string(),
            });
        }
    }
    Ok(cases)
}
