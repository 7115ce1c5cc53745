//! Lawyer self-registration.
//!
//! A registration arrives as raw form text: numbers as strings and lists as
//! comma-separated strings. `Directory::register` turns it into a validated
//! `LawyerRecord`, gives it the next free numeric id and appends it.

use crate::error::{DirectoryError, Result};
use crate::index::Directory;
use crate::types::{Availability, Contact, LawyerRecord};
use tracing::info;

/// Raw lawyer registration form
#[derive(Debug, Clone, Default)]
pub struct LawyerRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Comma-separated, e.g. "Family Law, Property Law"
    pub specialization: String,
    pub experience: String,
    pub fees: String,
    /// Comma-separated, order preserved
    pub qualifications: String,
    pub languages: String,
    /// Empty means available
    pub availability: String,
    pub bio: String,
}

fn rejected(field: &str, reason: impl Into<String>) -> DirectoryError {
    DirectoryError::RegistrationError {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(rejected(field, "is required"))
    } else {
        Ok(value)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl LawyerRegistration {
    /// Validate the form and build the record it describes
    pub fn into_record(self, id: String) -> Result<LawyerRecord> {
        let name = required("name", &self.name)?.to_string();
        let email = required("email", &self.email)?.to_string();
        if !email.contains('@') {
            return Err(rejected("email", format!("'{}' is not an email address", email)));
        }
        let location = required("location", &self.location)?.to_string();

        let specialization = split_list(&self.specialization);
        if specialization.is_empty() {
            return Err(rejected("specialization", "at least one is required"));
        }

        let experience_years = required("experience", &self.experience)?
            .parse::<u32>()
            .map_err(|e| rejected("experience", e.to_string()))?;

        let fee_per_unit = required("fees", &self.fees)?
            .parse::<f64>()
            .map_err(|e| rejected("fees", e.to_string()))?;
        if !fee_per_unit.is_finite() || fee_per_unit < 0.0 {
            return Err(rejected("fees", "must be a non-negative amount"));
        }

        let availability = if self.availability.trim().is_empty() {
            Availability::Available
        } else {
            self.availability
                .parse::<Availability>()
                .map_err(|e| rejected("availability", e.to_string()))?
        };

        Ok(LawyerRecord {
            id,
            name,
            specialization,
            experience_years,
            fee_per_unit,
            rating: 0.0,
            cases_won: 0,
            location,
            availability,
            contact: Contact {
                phone: self.phone.trim().to_string(),
                email,
            },
            qualifications: split_list(&self.qualifications),
            languages: split_list(&self.languages),
            bio: self.bio.trim().to_string(),
        })
    }
}

impl Directory {
    /// Register a new lawyer and return the stored record.
    ///
    /// New lawyers start unrated with no cases won. Emails are compared
    /// case-insensitively.
    pub fn register(&mut self, registration: LawyerRegistration) -> Result<&LawyerRecord> {
        let email = registration.email.trim().to_lowercase();
        if self
            .records
            .iter()
            .any(|r| !email.is_empty() && r.contact.email.to_lowercase() == email)
        {
            return Err(DirectoryError::DuplicateEmail(email));
        }

        let id = self.next_id()?;
        let record = registration.into_record(id)?;
        self.insert(record)?;

        let stored = &self.records[self.records.len() - 1];
        info!("Registered lawyer {} ({})", stored.name, stored.id);
        Ok(stored)
    }

    /// One past the largest numeric id, skipping any id already taken.
    ///
    /// When the largest id is `u64::MAX` the search wraps around to 1.
    /// Each record takes at most one number, so the first `len() + 1`
    /// candidates always include a free one.
    fn next_id(&self) -> Result<String> {
        let start = self
            .records
            .iter()
            .filter_map(|r| r.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max.checked_add(1).unwrap_or(1));
        (start..=u64::MAX)
            .chain(1..start)
            .map(|n| n.to_string())
            .find(|id| !self.contains(id))
            .ok_or_else(|| rejected("id", "no free numeric id left"))
    }
}
