//! Remote doctor directory client.
//!
//! Talks to the backend's read endpoints and falls back to the local store
//! when the backend is unavailable. Two category policies exist on purpose:
//! the general browser takes the union of backend and local categories, the
//! appointment selector takes the intersection.

mod transport;

pub use transport::*;

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::db::Database;
use crate::models::DoctorRecord;

/// Directory errors.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-200 from the backend. The body is kept raw, never parsed.
    #[error("backend returned status {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Client for the backend's directory endpoints.
pub struct DirectoryClient {
    transport: Arc<dyn HttpTransport>,
    base: Url,
}

impl DirectoryClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base: Url) -> Self {
        Self { transport, base }
    }

    /// GET `/doctors/categories`.
    pub fn fetch_categories(&self) -> DirectoryResult<Vec<String>> {
        let url = self.base.join("/doctors/categories")?;
        let response = self.transport.execute(&HttpRequest::get(url))?;
        if !response.is_ok() {
            return Err(DirectoryError::Backend {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// GET `/doctors?category={name}` (category URL-encoded).
    pub fn fetch_doctors(&self, category: &str) -> DirectoryResult<Vec<DoctorRecord>> {
        let mut url = self.base.join("/doctors")?;
        url.query_pairs_mut().append_pair("category", category);
        let response = self.transport.execute(&HttpRequest::get(url))?;
        if !response.is_ok() {
            return Err(DirectoryError::Backend {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Categories for the general browser: backend union local, backend
    /// order first, locals appended, de-duplicated. A backend failure
    /// degrades to local categories alone.
    pub fn browse_categories(&self, db: &Database) -> Vec<String> {
        let local = db.doctor_categories();
        match self.fetch_categories() {
            Ok(remote) => merge_categories(remote, local),
            Err(e) => {
                warn!("category fetch failed, using local store: {e}");
                local
            }
        }
    }

    /// Categories for the appointment selector: only backend categories that
    /// also exist locally. Deliberately narrower than [`browse_categories`];
    /// a backend failure surfaces here instead of falling back.
    ///
    /// [`browse_categories`]: Self::browse_categories
    pub fn appointment_categories(&self, db: &Database) -> DirectoryResult<Vec<String>> {
        let local = db.doctor_categories();
        let mut remote = self.fetch_categories()?;
        remote.retain(|category| local.contains(category));
        Ok(remote)
    }

    /// Doctors in one category, from the backend when it answers, otherwise
    /// filtered out of the local store.
    pub fn doctors_in_category(&self, db: &Database, category: &str) -> Vec<DoctorRecord> {
        match self.fetch_doctors(category) {
            Ok(doctors) => doctors,
            Err(e) => {
                warn!("doctor fetch for {category:?} failed, using local store: {e}");
                db.doctors_in_category(category)
            }
        }
    }

    /// Every doctor across every backend category, one listing request per
    /// category. Failed per-category fetches contribute nothing; a failed
    /// categories fetch degrades to the whole local list. Sorted by
    /// (category, name) so the combined order does not depend on which
    /// response arrived first.
    pub fn all_doctors(&self, db: &Database) -> Vec<DoctorRecord> {
        let categories = match self.fetch_categories() {
            Ok(categories) => categories,
            Err(e) => {
                warn!("category fetch failed, listing local store: {e}");
                return db.doctors();
            }
        };

        let mut all: Vec<DoctorRecord> = Vec::new();
        for category in &categories {
            match self.fetch_doctors(category) {
                Ok(doctors) => all.extend(doctors),
                Err(e) => warn!("skipping category {category:?}: {e}"),
            }
        }
        all.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
        all
    }
}

/// Union merge: backend order first, then local-only categories, duplicates
/// removed by exact string equality.
fn merge_categories(remote: Vec<String>, local: Vec<String>) -> Vec<String> {
    let mut merged = remote;
    for category in local {
        if !merged.contains(&category) {
            merged.push(category);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::testing::{Script, ScriptedTransport};
    use super::*;
    use std::sync::Arc;

    fn base() -> Url {
        Url::parse("http://localhost:8000").unwrap()
    }

    fn client(scripts: Vec<Script>) -> (DirectoryClient, Arc<ScriptedTransport>) {
        let transport = Arc::new(ScriptedTransport::new(scripts));
        (
            DirectoryClient::new(transport.clone(), base()),
            transport,
        )
    }

    fn seeded_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.seed_default_doctors().unwrap();
        db
    }

    #[test]
    fn test_fetch_categories_parses_array() {
        let (client, _) = client(vec![Script {
            path_and_query: "/doctors/categories",
            status: 200,
            body: r#"["Physician","Dermatologist"]"#,
        }]);
        assert_eq!(
            client.fetch_categories().unwrap(),
            vec!["Physician", "Dermatologist"]
        );
    }

    #[test]
    fn test_fetch_categories_keeps_failure_body_raw() {
        let (client, _) = client(vec![Script {
            path_and_query: "/doctors/categories",
            status: 503,
            body: "upstream down",
        }]);
        match client.fetch_categories() {
            Err(DirectoryError::Backend { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream down");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_doctors_encodes_category() {
        let (client, transport) = client(vec![Script {
            path_and_query: "/doctors?category=Child+Specialist",
            status: 200,
            body: r#"[{"name":"Dr Munawar Siyal","category":"Child Specialist","experience":10,"phone":""}]"#,
        }]);
        let doctors = client.fetch_doctors("Child Specialist").unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_merge_policy_backend_first_then_local_only() {
        assert_eq!(
            merge_categories(
                vec!["A".into(), "B".into()],
                vec!["C".into()],
            ),
            vec!["A", "B", "C"]
        );
        assert_eq!(
            merge_categories(
                vec!["A".into(), "B".into()],
                vec!["B".into(), "C".into()],
            ),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_browse_categories_falls_back_to_local() {
        let db = seeded_db();
        let (client, _) = client(Vec::new());
        assert_eq!(client.browse_categories(&db), db.doctor_categories());
    }

    #[test]
    fn test_appointment_categories_intersect_local() {
        let db = seeded_db();
        let (client, _) = client(vec![Script {
            path_and_query: "/doctors/categories",
            status: 200,
            body: r#"["Physician","Dermatologist","Cardiologist"]"#,
        }]);
        // Dermatologist is backend-only, so it is dropped
        assert_eq!(
            client.appointment_categories(&db).unwrap(),
            vec!["Physician", "Cardiologist"]
        );
    }

    #[test]
    fn test_appointment_categories_surface_backend_failure() {
        let db = seeded_db();
        let (client, _) = client(vec![Script {
            path_and_query: "/doctors/categories",
            status: 500,
            body: "boom",
        }]);
        assert!(client.appointment_categories(&db).is_err());
    }

    #[test]
    fn test_doctors_in_category_falls_back_to_local_filter() {
        let db = seeded_db();
        let (client, _) = client(Vec::new());
        let doctors = client.doctors_in_category(&db, "Neurologist");
        assert_eq!(doctors.len(), 3);
        assert!(doctors.iter().all(|d| d.category == "Neurologist"));
    }

    #[test]
    fn test_all_doctors_sorted_and_skips_failed_categories() {
        let db = seeded_db();
        let (client, _) = client(vec![
            Script {
                path_and_query: "/doctors/categories",
                status: 200,
                body: r#"["Physician","Neurologist"]"#,
            },
            Script {
                path_and_query: "/doctors?category=Physician",
                status: 200,
                body: r#"[
                    {"name":"Dr B","category":"Physician","experience":1,"phone":""},
                    {"name":"Dr A","category":"Physician","experience":2,"phone":""}
                ]"#,
            },
            // Neurologist listing has no script and therefore fails
        ]);
        let all = client.all_doctors(&db);
        let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr A", "Dr B"]);
    }

    #[test]
    fn test_all_doctors_degrades_to_whole_local_list() {
        let db = seeded_db();
        let (client, _) = client(Vec::new());
        assert_eq!(client.all_doctors(&db), db.doctors());
    }
}
