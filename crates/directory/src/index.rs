//! The in-memory directory snapshot.
//!
//! `Directory` owns the records in source order and keeps an id index for
//! O(1) lookups. Source order matters: every filtered view is a stable
//! subsequence of `records()`.

use crate::error::{DirectoryError, Result};
use crate::types::{LawyerId, LawyerRecord};
use std::collections::HashMap;

/// Read snapshot of the lawyer collection for one filtering session.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    pub(crate) records: Vec<LawyerRecord>,
    pub(crate) by_id: HashMap<LawyerId, usize>,
}

impl Directory {
    /// Creates a new, empty Directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from records, rejecting the whole batch if any
    /// record is invalid or an id repeats.
    pub fn from_records(records: Vec<LawyerRecord>) -> Result<Self> {
        let mut directory = Self::new();
        for record in records {
            directory.insert(record)?;
        }
        Ok(directory)
    }

    /// Validate and append one record
    pub fn insert(&mut self, record: LawyerRecord) -> Result<()> {
        validate_record(&record)?;
        if self.by_id.contains_key(&record.id) {
            return Err(DirectoryError::DuplicateId(record.id));
        }
        self.by_id.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// All records in source order
    pub fn records(&self) -> &[LawyerRecord] {
        &self.records
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> Option<&LawyerRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Check one record's domain invariants
pub fn validate_record(record: &LawyerRecord) -> Result<()> {
    let invalid = |field: &str, value: String| DirectoryError::InvalidValue {
        id: record.id.clone(),
        field: field.to_string(),
        value,
    };

    if record.id.trim().is_empty() {
        return Err(invalid("id", record.id.clone()));
    }
    if record.name.trim().is_empty() {
        return Err(invalid("name", record.name.clone()));
    }
    if record.location.trim().is_empty() {
        return Err(invalid("location", record.location.clone()));
    }
    if record.specialization.iter().all(|s| s.trim().is_empty()) {
        return Err(invalid("specialization", format!("{:?}", record.specialization)));
    }
    if !(0.0..=5.0).contains(&record.rating) {
        return Err(invalid("rating", record.rating.to_string()));
    }
    if !record.fee_per_unit.is_finite() || record.fee_per_unit < 0.0 {
        return Err(invalid("fee_per_unit", record.fee_per_unit.to_string()));
    }
    Ok(())
}
