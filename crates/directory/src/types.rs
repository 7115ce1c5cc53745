//! Core domain types for the lawyer directory.
//!
//! Records are read-only snapshots supplied by a data source. The only
//! per-user state, like and bookmark flags, lives in `Annotations` and is
//! kept beside a record, never inside it.

use crate::error::DirectoryError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque identifier for a lawyer, unique within one directory snapshot
pub type LawyerId = String;

/// Opaque identifier for a case record
pub type CaseId = String;

// =============================================================================
// Lawyer-related Types
// =============================================================================

/// Whether a lawyer is currently taking clients.
///
/// Input files use both the lowercase form and the capitalised labels
/// shown in the marketplace view ("Not Available" included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[serde(alias = "Available")]
    Available,
    #[serde(alias = "Busy")]
    Busy,
    #[serde(alias = "Unavailable", alias = "Not Available", alias = "not available")]
    Unavailable,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::Unavailable => "unavailable",
        };
        f.write_str(label)
    }
}

impl FromStr for Availability {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Availability::Available),
            "busy" => Ok(Availability::Busy),
            "unavailable" | "not available" => Ok(Availability::Unavailable),
            _ => Err(DirectoryError::UnknownVariant {
                kind: "availability",
                value: s.to_string(),
            }),
        }
    }
}

/// Availability constraint a user can select.
///
/// `unavailable` is a record state only; it is never offered as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityFilter {
    #[default]
    Any,
    Available,
    Busy,
}

impl AvailabilityFilter {
    /// True when a record in `state` satisfies this constraint
    pub fn accepts(self, state: Availability) -> bool {
        match self {
            AvailabilityFilter::Any => true,
            AvailabilityFilter::Available => state == Availability::Available,
            AvailabilityFilter::Busy => state == Availability::Busy,
        }
    }
}

impl fmt::Display for AvailabilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AvailabilityFilter::Any => "any",
            AvailabilityFilter::Available => "available",
            AvailabilityFilter::Busy => "busy",
        };
        f.write_str(label)
    }
}

impl FromStr for AvailabilityFilter {
    type Err = DirectoryError;

    /// "all" and the empty string are accepted as spellings of `any`,
    /// matching the select boxes of the directory views.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "any" | "all" => Ok(AvailabilityFilter::Any),
            "available" => Ok(AvailabilityFilter::Available),
            "busy" => Ok(AvailabilityFilter::Busy),
            _ => Err(DirectoryError::UnknownVariant {
                kind: "availability filter",
                value: s.to_string(),
            }),
        }
    }
}

/// Contact details, opaque to this crate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// One lawyer's directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawyerRecord {
    pub id: LawyerId,
    pub name: String,
    /// Areas of practice. Accepted on input as a single string or a list.
    #[serde(deserialize_with = "one_or_many")]
    pub specialization: Vec<String>,
    #[serde(alias = "experience", alias = "experienceYears")]
    pub experience_years: u32,
    /// Fee per consultation unit, currency-agnostic
    #[serde(alias = "fees", alias = "feePerUnit")]
    pub fee_per_unit: f64,
    /// Rating from 0.0 to 5.0
    pub rating: f64,
    #[serde(default, alias = "casesWon")]
    pub cases_won: u32,
    pub location: String,
    pub availability: Availability,
    #[serde(flatten)]
    pub contact: Contact,
    /// Display order is significant
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub bio: String,
}

impl LawyerRecord {
    /// Initials used when no avatar is available ("Adv. Priya Sharma" -> "APS")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(single) => vec![single],
        OneOrMany::Many(many) => many,
    })
}

/// Per-session interaction flags for one record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotations {
    pub liked: bool,
    pub bookmarked: bool,
}

// =============================================================================
// Case-related Types
// =============================================================================

/// How a past case ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseOutcome {
    Won,
    Lost,
    Settled,
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CaseOutcome::Won => "Won",
            CaseOutcome::Lost => "Lost",
            CaseOutcome::Settled => "Settled",
        };
        f.write_str(label)
    }
}

/// A past case shown as a reference for a similar matter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: CaseId,
    pub title: String,
    pub year: u16,
    pub court: String,
    pub outcome: CaseOutcome,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub penalty: Option<String>,
    #[serde(default)]
    pub precedent: bool,
    /// Similarity to the user's matter, 0-100
    #[serde(default, alias = "relevanceScore")]
    pub relevance_score: u8,
}
