//! Patient models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-issued patient identifier.
///
/// Opaque to this client; the backend assigns it on registration and echoes
/// it on login.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PatientId(pub i64);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The in-memory session for a logged-in patient.
///
/// Established on successful login or registration, cleared on logout.
/// Never persisted; a new process starts logged out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientSession {
    pub patient_id: PatientId,
}

impl PatientSession {
    pub fn new(patient_id: PatientId) -> Self {
        Self { patient_id }
    }
}

/// Success body of the login and registration endpoints.
#[derive(Debug, Deserialize)]
pub struct PatientIdResponse {
    #[serde(rename = "patientId")]
    pub patient_id: PatientId,
}
