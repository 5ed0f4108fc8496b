//! Domain models for the clinic desk.

mod doctor;
mod patient;
mod payloads;

pub use doctor::*;
pub use patient::*;
pub use payloads::*;

use thiserror::Error;

/// Form validation errors, raised before any store or network access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

pub type ValidationResult = Result<(), ValidationError>;
