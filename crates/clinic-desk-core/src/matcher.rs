//! Keyword symptom-to-specialty matcher.
//!
//! A lowercase substring scan over a small table of phrase → specialty
//! rules. Several phrases map to the same specialty, and overlapping
//! phrases are welcome: "my child has a fever" matches both "fever"
//! (Physician) and "child" (Child Specialist).

use crate::db::Database;
use crate::models::DoctorRecord;

/// Fixed message shown when no phrase matches.
pub const NO_MATCH_MESSAGE: &str = "No matching specialty found for the given symptoms.";

/// One phrase → specialty rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomRule {
    /// Lowercase phrase tested as a substring of the input
    pub phrase: String,
    /// Specialty this phrase points at
    pub specialty: String,
}

impl SymptomRule {
    pub fn new(phrase: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            specialty: specialty.into(),
        }
    }
}

/// Doctors suggested for one matched specialty.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialtyGroup {
    pub specialty: String,
    pub doctors: Vec<DoctorRecord>,
}

/// Ordered rule table.
pub struct SymptomMap {
    rules: Vec<SymptomRule>,
}

impl Default for SymptomMap {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

impl SymptomMap {
    /// Build a map from a caller-supplied table.
    pub fn with_rules(rules: Vec<SymptomRule>) -> Self {
        Self { rules }
    }

    /// Append a rule. Phrases are stored lowercase.
    pub fn add_rule(&mut self, phrase: &str, specialty: &str) {
        self.rules
            .push(SymptomRule::new(phrase.to_lowercase(), specialty));
    }

    pub fn rules(&self) -> &[SymptomRule] {
        &self.rules
    }

    /// Specialties whose phrase occurs in the input, deduplicated, in
    /// first-match order over the rule table.
    pub fn match_specialties(&self, free_text: &str) -> Vec<String> {
        let input = free_text.to_lowercase();
        let mut matched: Vec<String> = Vec::new();
        for rule in &self.rules {
            if input.contains(&rule.phrase) && !matched.contains(&rule.specialty) {
                matched.push(rule.specialty.clone());
            }
        }
        matched
    }

    /// Matched specialties with the local doctors of each, store order
    /// preserved. Empty means no match; callers show [`NO_MATCH_MESSAGE`].
    pub fn suggest(&self, db: &Database, free_text: &str) -> Vec<SpecialtyGroup> {
        self.match_specialties(free_text)
            .into_iter()
            .map(|specialty| {
                let doctors = db.doctors_in_category(&specialty);
                SpecialtyGroup { specialty, doctors }
            })
            .collect()
    }
}

/// The built-in table.
fn default_rules() -> Vec<SymptomRule> {
    [
        ("headache", "Neurologist"),
        ("dizziness", "Neurologist"),
        ("memory loss", "Neurologist"),
        ("chest pain", "Cardiologist"),
        ("shortness of breath", "Cardiologist"),
        ("heart palpitations", "Cardiologist"),
        ("fever", "Physician"),
        ("cough", "Physician"),
        ("fatigue", "Physician"),
        ("child illness", "Child Specialist"),
        ("child fever", "Child Specialist"),
        ("child cough", "Child Specialist"),
        // Bare "child" comes last so the more specific phrases above win
        // the insertion-order race when both apply
        ("child", "Child Specialist"),
    ]
    .into_iter()
    .map(|(phrase, specialty)| SymptomRule::new(phrase, specialty))
    .collect()
}
