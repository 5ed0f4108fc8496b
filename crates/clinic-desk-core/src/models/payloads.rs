//! Request payloads and form inputs for the backend endpoints.
//!
//! Payload structs serialize with the exact field names the backend expects
//! (camelCase). Form structs are what callers fill in; the gateway turns
//! them into payloads after validation.

use serde::Serialize;

use super::PatientId;

/// POST body for `/appointments`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub doctor_category: String,
    pub doctor: String,
    pub patient_id: PatientId,
    pub date: String,
    pub time: String,
    pub disease: String,
}

/// POST body for `/patients/register`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub patient_name: String,
    pub father_name: String,
    pub cnic: String,
    pub phone: String,
    pub age: u32,
    pub disease: String,
}

/// POST body for `/patients/login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub login_cnic: String,
}

/// Appointment form input. The doctor is referenced by display name and
/// resolved against the local store at booking time.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub doctor_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour; a missing leading zero is tolerated
    pub time: String,
    /// Free-text reason, may be empty
    pub reason: String,
}

/// Registration form input.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub patient_name: String,
    pub father_name: String,
    pub cnic: String,
    pub phone: String,
    pub age: u32,
    pub disease: String,
}
