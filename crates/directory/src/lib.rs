//! # Directory Crate
//!
//! Domain types and the read snapshot for the lawyer directory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (LawyerRecord, Availability, CaseRecord, ...)
//! - **index**: The `Directory` snapshot with id lookups and validation
//! - **loader**: Load and save JSON datasets
//! - **registration**: Turn a lawyer registration form into a record
//! - **error**: Error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use directory::Directory;
//! use std::path::Path;
//!
//! let directory = Directory::load_from_file(Path::new("data/lawyers.json"))?;
//! let lawyer = directory.get("1").unwrap();
//! println!("{} practises {}", lawyer.name, lawyer.specialization.join(", "));
//! ```

pub mod error;
pub mod types;
pub mod index;
pub mod loader;
pub mod registration;

pub use error::{DirectoryError, Result};
pub use index::{validate_record, Directory};
pub use loader::{cases_from_json_str, load_cases_from_file};
pub use registration::LawyerRegistration;
pub use types::{
    // Type aliases
    LawyerId,
    CaseId,
    // Core types
    LawyerRecord,
    Contact,
    Annotations,
    CaseRecord,
    // Enums
    Availability,
    AvailabilityFilter,
    CaseOutcome,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> LawyerRecord {
        LawyerRecord {
            id: id.to_string(),
            name: "Adv. Test".to_string(),
            specialization: vec!["Civil Law".to_string()],
            experience_years: 3,
            fee_per_unit: 1500.0,
            rating: 4.0,
            cases_won: 10,
            location: "Chennai".to_string(),
            availability: Availability::Available,
            contact: Contact::default(),
            qualifications: vec![],
            languages: vec![],
            bio: String::new(),
        }
    }

    #[test]
    fn test_directory_creation() {
        let directory = Directory::new();
        assert!(directory.is_empty());
        assert!(directory.get("1").is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut directory = Directory::new();
        directory.insert(record("1")).unwrap();
        directory.insert(record("2")).unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get("2").unwrap().id, "2");
        assert!(directory.contains("1"));
    }

    #[test]
    fn test_insert_rejects_negative_fee() {
        let mut bad = record("1");
        bad.fee_per_unit = -1.0;
        assert!(Directory::new().insert(bad).is_err());
    }

    #[test]
    fn test_insert_rejects_blank_name() {
        let mut bad = record("1");
        bad.name = "   ".to_string();
        assert!(validate_record(&bad).is_err());
    }
}
