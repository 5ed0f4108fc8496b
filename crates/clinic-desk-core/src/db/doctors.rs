//! Doctor list operations.
//!
//! The whole directory lives under one key as a JSON array; every mutation
//! rewrites the full list.

use super::{Database, DbResult};
use crate::models::DoctorRecord;

/// Fixed key holding the serialized doctor list.
const DOCTORS_KEY: &str = "local_doctors";

impl Database {
    /// All locally stored doctors, in stored order.
    ///
    /// Never fails: a missing or corrupt value reads as an empty list.
    pub fn doctors(&self) -> Vec<DoctorRecord> {
        self.read_value(DOCTORS_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Replace the stored list wholesale.
    pub fn save_doctors(&self, doctors: &[DoctorRecord]) -> DbResult<()> {
        let json = serde_json::to_string(doctors)?;
        self.write_value(DOCTORS_KEY, &json)
    }

    /// Write the built-in directory on first use. A non-empty store is left
    /// untouched, so repeat calls are no-ops.
    pub fn seed_default_doctors(&self) -> DbResult<()> {
        if !self.doctors().is_empty() {
            return Ok(());
        }
        self.save_doctors(&default_doctors())
    }

    /// Append one doctor and persist. No duplicate detection.
    pub fn add_doctor(&self, doctor: DoctorRecord) -> DbResult<()> {
        let mut doctors = self.doctors();
        doctors.push(doctor);
        self.save_doctors(&doctors)
    }

    /// Distinct categories in first-seen order.
    pub fn doctor_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for doctor in self.doctors() {
            if !categories.contains(&doctor.category) {
                categories.push(doctor.category);
            }
        }
        categories
    }

    /// Doctors whose category equals `category` exactly, in stored order.
    pub fn doctors_in_category(&self, category: &str) -> Vec<DoctorRecord> {
        self.doctors()
            .into_iter()
            .filter(|doctor| doctor.category == category)
            .collect()
    }

    /// Exact-name lookup.
    pub fn find_doctor(&self, name: &str) -> Option<DoctorRecord> {
        self.doctors().into_iter().find(|doctor| doctor.name == name)
    }

    /// All stored doctor names, for autocomplete and suggestions.
    pub fn doctor_names(&self) -> Vec<String> {
        self.doctors().into_iter().map(|doctor| doctor.name).collect()
    }
}

/// The built-in directory written on first use.
pub fn default_doctors() -> Vec<DoctorRecord> {
    let seed: [(&str, &str, u32); 19] = [
        // Child Specialist
        ("Dr Munawar Siyal", "Child Specialist", 10),
        ("Dr Ali Akbar Siyal", "Child Specialist", 8),
        ("Dr Ameerul Jamali", "Child Specialist", 7),
        ("Dr Ali asgher Shaikh", "Child Specialist", 6),
        ("Dr Amber Ali Siyal", "Child Specialist", 5),
        ("Dr Sadiq Siyal", "Child Specialist", 9),
        // Physician
        ("Prof: Rafique Memon", "Physician", 15),
        ("Dr Shamsuddin Shaikh", "Physician", 12),
        ("Prof: Nasrullah Amir", "Physician", 14),
        ("Dr Anwar Ali Jamali", "Physician", 10),
        ("Dr Khawar Hussain", "Physician", 11),
        // Neurologist
        ("Dr Abdul Razaq Mari", "Neurologist", 13),
        ("Dr Awais Bashir Larak", "Neurologist", 9),
        ("Dr Noor Nabi Siyal", "Neurologist", 8),
        // Cardiologist
        ("Dr Jagdeesh Khatri", "Cardiologist", 14),
        ("Dr Zafar Iqbal", "Cardiologist", 10),
        ("Dr Ilahi Bux", "Cardiologist", 12),
        ("Dr Asad Khan", "Cardiologist", 11),
        ("Prof Dr Tariq Mahmood", "Cardiologist", 15),
    ];

    seed.into_iter()
        .map(|(name, category, experience)| DoctorRecord::new(name, category, experience))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_reads_empty() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.doctors().is_empty());
    }

    #[test]
    fn test_seed_writes_builtin_list() {
        let db = Database::open_in_memory().unwrap();
        db.seed_default_doctors().unwrap();

        let doctors = db.doctors();
        assert_eq!(doctors.len(), 19);
        assert_eq!(db.doctor_categories().len(), 4);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.seed_default_doctors().unwrap();
        let first = db.doctors();

        db.seed_default_doctors().unwrap();
        assert_eq!(db.doctors(), first);
    }

    #[test]
    fn test_seed_skips_populated_store() {
        let db = Database::open_in_memory().unwrap();
        db.add_doctor(DoctorRecord::new("Dr Solo", "Physician", 1))
            .unwrap();

        db.seed_default_doctors().unwrap();
        assert_eq!(db.doctors().len(), 1);
    }

    #[test]
    fn test_corrupt_value_reads_empty() {
        let db = Database::open_in_memory().unwrap();
        db.write_value("local_doctors", "not json at all").unwrap();
        assert!(db.doctors().is_empty());
    }

    #[test]
    fn test_add_round_trip() {
        let db = Database::open_in_memory().unwrap();
        db.seed_default_doctors().unwrap();

        let mut doctor = DoctorRecord::new("Dr X", "Physician", 5);
        doctor.phone = "123".into();
        db.add_doctor(doctor.clone()).unwrap();

        assert_eq!(db.doctors().len(), 20);
        assert_eq!(db.find_doctor("Dr X"), Some(doctor.clone()));
        assert!(db.doctors_in_category("Physician").contains(&doctor));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let db = Database::open_in_memory().unwrap();
        db.save_doctors(&[
            DoctorRecord::new("A", "Physician", 1),
            DoctorRecord::new("B", "Neurologist", 2),
            DoctorRecord::new("C", "Physician", 3),
        ])
        .unwrap();

        assert_eq!(db.doctor_categories(), vec!["Physician", "Neurologist"]);
    }

    #[test]
    fn test_find_doctor_is_exact() {
        let db = Database::open_in_memory().unwrap();
        db.seed_default_doctors().unwrap();

        assert!(db.find_doctor("Dr Zafar Iqbal").is_some());
        assert!(db.find_doctor("dr zafar iqbal").is_none());
    }
}
