//! Clinic Desk Core Library
//!
//! Local-first client for a small clinic backend: doctor directory browsing
//! with local fallback, keyword symptom triage, and appointment booking.
//!
//! # Architecture
//!
//! ```text
//!                  ┌────────────────────────────────────────┐
//!                  │               ClinicDesk               │
//!                  └───┬───────────────┬────────────────┬───┘
//!                      │               │                │
//!                      ▼               ▼                ▼
//!               DirectoryClient   SymptomMap         Gateway
//!               (categories,      (phrase →      (book / register
//!                listings)         specialty)     / login, session)
//!                      │               │                │
//!            ┌─────────┴───────┐      │       ┌────────┘
//!            ▼                 ▼      ▼       ▼
//!      clinic backend        Database (local store,
//!      (REST, JSON)          seeded doctor list)
//! ```
//!
//! The backend is authoritative when reachable; the local store answers
//! when it is not. Bookings require an explicit [`PatientSession`] held by
//! the gateway for the life of the process.
//!
//! # Modules
//!
//! - [`db`]: SQLite-backed local store with the seeded doctor list
//! - [`models`]: domain types and wire payloads
//! - [`directory`]: backend read endpoints with local fallback
//! - [`matcher`]: symptom phrase → specialty table
//! - [`gateway`]: booking/registration/login and the patient session
//! - [`config`]: environment-driven configuration

pub mod config;
pub mod db;
pub mod directory;
pub mod gateway;
pub mod matcher;
pub mod models;

// Re-export commonly used types
pub use config::ClinicConfig;
pub use db::Database;
pub use directory::{DirectoryClient, HttpTransport, ReqwestTransport};
pub use gateway::Gateway;
pub use matcher::{SpecialtyGroup, SymptomMap, SymptomRule, NO_MATCH_MESSAGE};
pub use models::{
    BookingForm, DoctorRecord, PatientId, PatientSession, RegistrationForm, ValidationError,
};

use std::sync::Arc;

use url::Url;

/// Top-level error for facade operations.
#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error(transparent)]
    Db(#[from] db::DbError),

    #[error(transparent)]
    Directory(#[from] directory::DirectoryError),

    #[error(transparent)]
    Gateway(#[from] gateway::GatewayError),

    #[error(transparent)]
    Validation(#[from] models::ValidationError),
}

pub type ClinicResult<T> = Result<T, ClinicError>;

/// The assembled client: local store, directory client, symptom map, and
/// gateway sharing one transport.
pub struct ClinicDesk {
    db: Database,
    directory: DirectoryClient,
    matcher: SymptomMap,
    gateway: Gateway,
}

impl ClinicDesk {
    /// Open the store at the configured path and wire everything to the
    /// configured backend. Seeds the default doctors on first use.
    pub fn open(config: &ClinicConfig) -> ClinicResult<Self> {
        let db = Database::open(&config.db_path)?;
        Self::with_transport(db, config.base_url.clone(), Arc::new(ReqwestTransport::new()))
    }

    /// Assemble over an explicit database and transport. This is the seam
    /// tests use to script backend behavior.
    pub fn with_transport(
        db: Database,
        base_url: Url,
        transport: Arc<dyn HttpTransport>,
    ) -> ClinicResult<Self> {
        db.seed_default_doctors()?;
        let directory = DirectoryClient::new(transport.clone(), base_url.clone());
        let gateway = Gateway::new(transport, base_url);
        Ok(Self {
            db,
            directory,
            matcher: SymptomMap::default(),
            gateway,
        })
    }

    /// The local store.
    pub fn db(&self) -> &Database {
        &self.db
    }

    // =========================================================================
    // Directory Operations
    // =========================================================================

    /// Categories for the general browser (backend union local).
    pub fn browse_categories(&self) -> Vec<String> {
        self.directory.browse_categories(&self.db)
    }

    /// Categories for the appointment selector (backend intersect local).
    pub fn appointment_categories(&self) -> ClinicResult<Vec<String>> {
        Ok(self.directory.appointment_categories(&self.db)?)
    }

    /// Doctors in one category, with local fallback.
    pub fn doctors_in_category(&self, category: &str) -> Vec<DoctorRecord> {
        self.directory.doctors_in_category(&self.db, category)
    }

    /// Every doctor across all backend categories, (category, name)-sorted.
    pub fn all_doctors(&self) -> Vec<DoctorRecord> {
        self.directory.all_doctors(&self.db)
    }

    /// Stored doctor names, for autocomplete.
    pub fn doctor_names(&self) -> Vec<String> {
        self.db.doctor_names()
    }

    /// Validate and append a doctor to the local store.
    pub fn add_doctor(&self, doctor: DoctorRecord) -> ClinicResult<()> {
        doctor.validate()?;
        self.db.add_doctor(doctor)?;
        Ok(())
    }

    // =========================================================================
    // Symptom Triage
    // =========================================================================

    /// Matched specialties with their local doctors. Empty means no phrase
    /// matched; callers show [`NO_MATCH_MESSAGE`].
    pub fn suggest_doctors(&self, free_text: &str) -> Vec<SpecialtyGroup> {
        self.matcher.suggest(&self.db, free_text)
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Log in by CNIC, establishing the session.
    pub fn login(&mut self, cnic: &str) -> ClinicResult<PatientId> {
        Ok(self.gateway.login(cnic)?)
    }

    /// Register a patient, establishing the session.
    pub fn register(&mut self, form: &RegistrationForm) -> ClinicResult<PatientId> {
        Ok(self.gateway.register(form)?)
    }

    /// Book an appointment for the active session.
    pub fn book(&mut self, form: &BookingForm) -> ClinicResult<()> {
        Ok(self.gateway.book(&self.db, form)?)
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&PatientSession> {
        self.gateway.session()
    }

    /// Drop the active session.
    pub fn logout(&mut self) {
        self.gateway.logout()
    }
}
