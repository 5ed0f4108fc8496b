//! Booking, registration, and login gateway.
//!
//! Serializes form input into the backend's JSON payloads and owns the
//! patient session. Every precondition is checked before a request goes
//! out; a booking with no session or an unknown doctor never touches the
//! network. Failure bodies are surfaced raw, never parsed as JSON.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use strsim::jaro_winkler;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::db::Database;
use crate::directory::{HttpRequest, HttpTransport, TransportError};
use crate::models::{
    BookingForm, BookingPayload, LoginPayload, PatientId, PatientIdResponse, PatientSession,
    RegistrationForm, RegistrationPayload,
};

/// Minimum Jaro-Winkler similarity for a nearest-name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Gateway errors.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Booking attempted with no active session.
    #[error("no active patient session")]
    NotLoggedIn,

    /// The selected doctor has no exact-name match in the local store.
    #[error("doctor not found: {name}")]
    DoctorNotFound {
        name: String,
        /// Closest stored name, when one is close enough to be useful
        suggestion: Option<String>,
    },

    /// A form field failed validation before any network call.
    #[error("invalid {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    /// Non-200 from the backend; `body` is the raw response text.
    #[error("{action} failed with status {status}: {body}")]
    Backend {
        action: &'static str,
        status: u16,
        body: String,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Backend gateway holding the active patient session.
pub struct Gateway {
    transport: Arc<dyn HttpTransport>,
    base: Url,
    session: Option<PatientSession>,
}

impl Gateway {
    pub fn new(transport: Arc<dyn HttpTransport>, base: Url) -> Self {
        Self {
            transport,
            base,
            session: None,
        }
    }

    /// The active session, if a login or registration has succeeded.
    pub fn session(&self) -> Option<&PatientSession> {
        self.session.as_ref()
    }

    /// Drop the active session.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// POST `/patients/login`. Success establishes the session.
    pub fn login(&mut self, cnic: &str) -> GatewayResult<PatientId> {
        let payload = LoginPayload {
            login_cnic: cnic.to_string(),
        };
        let response = self.post_json("/patients/login", "login", &payload)?;
        let parsed: PatientIdResponse = serde_json::from_str(&response)?;
        self.session = Some(PatientSession::new(parsed.patient_id));
        info!("logged in as patient {}", parsed.patient_id);
        Ok(parsed.patient_id)
    }

    /// POST `/patients/register`. Success returns the assigned id and
    /// establishes the session.
    pub fn register(&mut self, form: &RegistrationForm) -> GatewayResult<PatientId> {
        let payload = RegistrationPayload {
            patient_name: form.patient_name.clone(),
            father_name: form.father_name.clone(),
            cnic: form.cnic.clone(),
            phone: form.phone.clone(),
            age: form.age,
            disease: form.disease.clone(),
        };
        let response = self.post_json("/patients/register", "registration", &payload)?;
        let parsed: PatientIdResponse = serde_json::from_str(&response)?;
        self.session = Some(PatientSession::new(parsed.patient_id));
        info!("registered as patient {}", parsed.patient_id);
        Ok(parsed.patient_id)
    }

    /// POST `/appointments` for the active session.
    ///
    /// The doctor is resolved by exact name from the local store and the
    /// record's category rides along in the payload.
    pub fn book(&mut self, db: &Database, form: &BookingForm) -> GatewayResult<()> {
        let session = self.session.ok_or(GatewayError::NotLoggedIn)?;

        let doctor = db
            .find_doctor(&form.doctor_name)
            .ok_or_else(|| GatewayError::DoctorNotFound {
                name: form.doctor_name.clone(),
                suggestion: nearest_name(db, &form.doctor_name),
            })?;

        if NaiveDate::parse_from_str(&form.date, "%Y-%m-%d").is_err() {
            return Err(GatewayError::InvalidField {
                field: "date",
                value: form.date.clone(),
            });
        }
        let time = normalize_time(&form.time).ok_or_else(|| GatewayError::InvalidField {
            field: "time",
            value: form.time.clone(),
        })?;

        let payload = BookingPayload {
            doctor_category: doctor.category,
            doctor: doctor.name,
            patient_id: session.patient_id,
            date: form.date.clone(),
            time,
            disease: form.reason.clone(),
        };
        self.post_json("/appointments", "booking", &payload)?;
        debug!("appointment booked with {}", form.doctor_name);
        Ok(())
    }

    /// POST a payload and hand back the success body.
    fn post_json(
        &self,
        path: &str,
        action: &'static str,
        payload: &impl serde::Serialize,
    ) -> GatewayResult<String> {
        let url = self.base.join(path)?;
        let body = serde_json::to_string(payload)?;
        let response = self.transport.execute(&HttpRequest::post(url, body))?;
        if !response.is_ok() {
            return Err(GatewayError::Backend {
                action,
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }
}

/// Zero-pad `H:M` into `HH:MM` and reject anything that is not a valid
/// 24-hour wall-clock time.
fn normalize_time(time: &str) -> Option<String> {
    let (hours, minutes) = time.split_once(':')?;
    let padded = format!("{:0>2}:{:0>2}", hours, minutes);
    NaiveTime::parse_from_str(&padded, "%H:%M").ok()?;
    Some(padded)
}

/// Closest stored doctor name, when close enough.
fn nearest_name(db: &Database, name: &str) -> Option<String> {
    let wanted = name.to_lowercase();
    db.doctor_names()
        .into_iter()
        .map(|candidate| {
            let score = jaro_winkler(&candidate.to_lowercase(), &wanted);
            (candidate, score)
        })
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(candidate, _)| candidate)
}
