//! Client configuration (§6): the options a caller can set, plus the
//! environment-derived overrides (`FIRESTORE_EMULATOR_HOST`,
//! `FUNCTION_TRIGGER_TYPE`) read once at client construction.

use std::collections::HashMap;

use google_cloud_gax::conn::{ConnectionOptions, Environment};
use token_source::TokenSourceProvider;

use crate::error::Error;

pub const DEFAULT_DATABASE_ID: &str = "(default)";
pub const DEFAULT_NUM_CHANNELS: usize = 4;
const EMULATOR_HOST_ENV: &str = "FIRESTORE_EMULATOR_HOST";
const GCF_TRIGGER_ENV: &str = "FUNCTION_TRIGGER_TYPE";
const EMULATOR_AUTH_HEADER: (&str, &str) = ("authorization", "Bearer owner");

/// `projectId`, `databaseId`, transport selection, and the handful of
/// behavioral toggles recognized by this client.
#[derive(Clone)]
pub struct FirestoreConfig {
    pub project_id: Option<String>,
    pub database_id: String,
    /// How many underlying gRPC channels the connection manager round-robins
    /// over; independent of how many pooled [`crate::pool::ClientPool`]
    /// client wrappers end up leased against them.
    pub num_channels: usize,
    pub max_idle_channels: usize,
    pub custom_headers: HashMap<String, String>,
    pub firebase_version: Option<String>,
    pub use_big_int: bool,
    pub conn_options: ConnectionOptions,
    pub(crate) environment: Option<Environment>,
    /// Set when running inside a Google Cloud Function: prefer wrapping
    /// reads in transactions to tolerate the platform's two-minute
    /// idle-connection teardown (§6, "GCF detection").
    pub(crate) prefer_transactional_reads: bool,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        let (environment, custom_headers) = detect_emulator();
        FirestoreConfig {
            project_id: None,
            database_id: DEFAULT_DATABASE_ID.to_string(),
            num_channels: DEFAULT_NUM_CHANNELS,
            max_idle_channels: crate::pool::DEFAULT_MAX_IDLE,
            custom_headers,
            firebase_version: None,
            use_big_int: false,
            conn_options: ConnectionOptions::default(),
            environment,
            prefer_transactional_reads: std::env::var(GCF_TRIGGER_ENV).is_ok(),
        }
    }
}

impl FirestoreConfig {
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_database_id(mut self, database_id: impl Into<String>) -> Self {
        self.database_id = database_id.into();
        self
    }

    pub fn with_num_channels(mut self, num_channels: usize) -> Self {
        self.num_channels = num_channels;
        self
    }

    pub fn with_max_idle_channels(mut self, max_idle_channels: usize) -> Self {
        self.max_idle_channels = max_idle_channels;
        self
    }

    pub fn with_custom_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(key.into(), value.into());
        self
    }

    /// Wires in real Application Default Credentials, replacing whatever
    /// environment was auto-detected at `Default::default()` time. A no-op
    /// when `FIRESTORE_EMULATOR_HOST` is set: the spec forbids contacting
    /// ADC while emulating.
    pub fn with_auth(mut self, token_source_provider: Box<dyn TokenSourceProvider>) -> Self {
        if self.is_emulator() {
            return self;
        }
        self.environment = Some(Environment::GoogleCloud(token_source_provider));
        self
    }

    pub fn is_emulator(&self) -> bool {
        matches!(self.environment, Some(Environment::Emulator(_)))
    }

    pub(crate) fn environment(&self) -> Result<&Environment, Error> {
        self.environment
            .as_ref()
            .ok_or_else(|| Error::invalid_argument("credentials", "no credentials configured; call with_auth() or set FIRESTORE_EMULATOR_HOST"))
    }

    /// `projects/{project}/databases/{database}`, the resource prefix every
    /// request carries (§4.2).
    pub fn database_path(&self, project_id: &str) -> String {
        format!("projects/{project_id}/databases/{database}", database = self.database_id)
    }
}

fn detect_emulator() -> (Option<Environment>, HashMap<String, String>) {
    match std::env::var(EMULATOR_HOST_ENV) {
        Ok(host) if !host.is_empty() => {
            let mut headers = HashMap::new();
            headers.insert(EMULATOR_AUTH_HEADER.0.to_string(), EMULATOR_AUTH_HEADER.1.to_string());
            (Some(Environment::Emulator(host)), headers)
        }
        _ => (None, HashMap::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_path_uses_default_database_id() {
        let config = FirestoreConfig::default();
        assert_eq!(config.database_path("proj"), "projects/proj/databases/(default)");
    }

    #[test]
    fn builder_methods_are_chainable() {
        let config = FirestoreConfig::default()
            .with_project_id("p")
            .with_database_id("db")
            .with_max_idle_channels(4)
            .with_custom_header("x-goog-request-params", "a=b");
        assert_eq!(config.project_id.as_deref(), Some("p"));
        assert_eq!(config.database_id, "db");
        assert_eq!(config.max_idle_channels, 4);
        assert_eq!(config.custom_headers.get("x-goog-request-params").map(String::as_str), Some("a=b"));
    }
}
