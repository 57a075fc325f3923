//! Runtime configuration.
//!
//! Precedence: command-line flags, then environment, then defaults.

use std::path::PathBuf;

/// Default fact service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://catfact.ninja/fact";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable overriding the endpoint.
pub const ENV_ENDPOINT: &str = "CATFACT_ENDPOINT";

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "CATFACT_LOG";

/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "CATFACT_LOG_FILE";

/// Configuration for the fact widget.
///
/// # Example
///
/// ```
/// use catfact::config::FactConfig;
///
/// let config = FactConfig::default().with_endpoint("http://localhost:8080/fact");
/// assert_eq!(config.endpoint, "http://localhost:8080/fact");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactConfig {
    /// URL the fact is fetched from
    pub endpoint: String,
    /// Tracing filter directive (EnvFilter syntax)
    pub log_filter: String,
    /// Where log output goes; `None` means the default data-dir location
    pub log_file: Option<PathBuf>,
}

impl Default for FactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl FactConfig {
    /// Create a FactConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fact endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the tracing filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Build a config from `CATFACT_ENDPOINT`, `CATFACT_LOG` (falling back to
    /// `RUST_LOG`) and `CATFACT_LOG_FILE`. Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = non_empty_var(ENV_ENDPOINT) {
            config = config.with_endpoint(endpoint);
        }
        if let Some(filter) = non_empty_var(ENV_LOG).or_else(|| non_empty_var("RUST_LOG")) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = non_empty_var(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }

        config
    }

    /// Resolved log file path: the override, or `<data_dir>/catfact/catfact.log`.
    ///
    /// Returns `None` when no override is set and the platform has no data dir.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join("catfact").join("catfact.log"))
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [ENV_ENDPOINT, ENV_LOG, ENV_LOG_FILE, "RUST_LOG"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_defaults() {
        let config = FactConfig::new();
        assert_eq!(config.endpoint, "https://catfact.ninja/fact");
        assert_eq!(config.log_filter, "info");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_builder() {
        let config = FactConfig::default()
            .with_endpoint("http://127.0.0.1:9000/fact")
            .with_log_filter("catfact=debug")
            .with_log_file("/tmp/catfact.log");
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/fact");
        assert_eq!(config.log_filter, "catfact=debug");
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/catfact.log")));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(ENV_ENDPOINT, "http://localhost:1234/fact");
        std::env::set_var(ENV_LOG, "debug");
        std::env::set_var(ENV_LOG_FILE, "/tmp/x.log");

        let config = FactConfig::from_env();
        assert_eq!(config.endpoint, "http://localhost:1234/fact");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/x.log")));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rust_log_fallback_and_empty_values() {
        clear_env();
        std::env::set_var(ENV_ENDPOINT, "  ");
        std::env::set_var("RUST_LOG", "warn");

        let config = FactConfig::from_env();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.log_filter, "warn");

        clear_env();
    }
}
