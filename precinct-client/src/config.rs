//! Client configuration

use std::path::PathBuf;

/// Default identity service base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default directory for the persisted session
pub const DEFAULT_STORAGE_DIR: &str = "./.precinct";

/// Client configuration for talking to the identity service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (e.g., "http://localhost:8000/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding the persisted session document
    pub storage_dir: PathBuf,

    /// Log filter directive for [`crate::logger::init_logger`]
    pub log_filter: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            log_filter: "precinct_client=info".to_string(),
        }
    }

    /// Read configuration from environment variables
    ///
    /// - `PRECINCT_API_BASE_URL`
    /// - `PRECINCT_TIMEOUT_SECS`
    /// - `PRECINCT_STORAGE_DIR`
    /// - `PRECINCT_LOG`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("PRECINCT_API_BASE_URL").unwrap_or(defaults.base_url),
            timeout: std::env::var("PRECINCT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout),
            storage_dir: std::env::var("PRECINCT_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            log_filter: std::env::var("PRECINCT_LOG").unwrap_or(defaults.log_filter),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the storage directory
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// Set the log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
