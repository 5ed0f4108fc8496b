//! Doctor models.

use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationResult};

/// A single doctor in the directory.
///
/// Records live in the local store as a flat JSON list and are also the
/// shape the backend returns from its listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorRecord {
    /// Display name (unique within a category by convention, not enforced)
    pub name: String,
    /// Specialty grouping, e.g. "Cardiologist"
    pub category: String,
    /// Years of experience
    pub experience: u32,
    /// Contact phone, may be empty in seeded records
    pub phone: String,
    /// Optional image reference, carried verbatim and never interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl DoctorRecord {
    /// Create a record with the required fields.
    pub fn new(name: impl Into<String>, category: impl Into<String>, experience: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            experience,
            phone: String::new(),
            image: None,
        }
    }

    /// Validate an operator-entered record (the add-doctor form).
    ///
    /// Seeded records are exempt; several ship with an empty phone.
    pub fn validate(&self) -> ValidationResult {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingField("phone"));
        }
        Ok(())
    }
}
