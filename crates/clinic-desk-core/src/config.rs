//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use tracing::{info, warn};
use url::Url;

/// Default backend address, the port the original clinic server listens on.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default on-disk location of the local store.
const DEFAULT_DB_PATH: &str = "clinic-desk.db";

/// Runtime configuration for the clinic desk.
#[derive(Debug, Clone)]
pub struct ClinicConfig {
    /// Base URL of the clinic backend
    pub base_url: Url,
    /// Path of the local SQLite store
    pub db_path: PathBuf,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL parses"),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl ClinicConfig {
    /// Load from `CLINIC_BASE_URL` and `CLINIC_DB_PATH`, logging when a
    /// variable is missing or unusable and the default steps in.
    pub fn load() -> Self {
        let defaults = Self::default();

        let base_url = match env::var("CLINIC_BASE_URL") {
            Ok(raw) => match Url::parse(&raw) {
                Ok(url) => url,
                Err(e) => {
                    warn!("invalid CLINIC_BASE_URL {raw:?}: {e}, using {DEFAULT_BASE_URL}");
                    defaults.base_url.clone()
                }
            },
            Err(_) => {
                info!("CLINIC_BASE_URL not set, using {DEFAULT_BASE_URL}");
                defaults.base_url.clone()
            }
        };

        let db_path = match env::var("CLINIC_DB_PATH") {
            Ok(raw) => PathBuf::from(raw),
            Err(_) => {
                info!("CLINIC_DB_PATH not set, using {DEFAULT_DB_PATH}");
                defaults.db_path.clone()
            }
        };

        Self { base_url, db_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClinicConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.db_path, PathBuf::from("clinic-desk.db"));
    }
}
