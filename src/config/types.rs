//! Configuration types for mediasort
//!
//! This module contains configuration structures and related types
//! used throughout the application.

use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

use super::constants::*;

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder to organize, as given on the command line or in settings
    pub scan_dir: Option<PathBuf>,
    /// Whether the release feed may be queried
    pub allow_update_check: bool,
    /// Version of the running release build, if any
    pub local_version: Option<String>,
    /// Endpoint of the latest release descriptor
    pub release_api_url: String,
    /// Page users are sent to for downloads
    pub release_page_url: String,
    /// Timeout for the release feed request in seconds
    pub update_timeout: u64,
    /// Countdown before powering off in seconds
    pub shutdown_timeout: u64,
    /// Product name shown in banners
    pub product_name: String,
    /// Log level
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_dir: None,
            allow_update_check: true,
            local_version: RELEASE_VERSION.map(str::to_string),
            release_api_url: DEFAULT_RELEASE_API_URL.to_string(),
            release_page_url: DEFAULT_RELEASE_PAGE_URL.to_string(),
            update_timeout: DEFAULT_UPDATE_TIMEOUT,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the folder to organize
    pub fn with_scan_dir(mut self, scan_dir: Option<PathBuf>) -> Self {
        self.scan_dir = scan_dir;
        self
    }

    /// Enables or disables the update check
    pub fn with_update_check(mut self, allow: bool) -> Self {
        self.allow_update_check = allow;
        self
    }

    /// Overrides the version of the running build
    pub fn with_local_version(mut self, version: Option<String>) -> Self {
        if version.is_some() {
            self.local_version = version;
        }
        self
    }

    /// Sets the release feed endpoints
    pub fn with_release_urls(mut self, api_url: &str, page_url: &str) -> Self {
        self.release_api_url = api_url.to_string();
        self.release_page_url = page_url.to_string();
        self
    }

    /// Sets the release feed timeout
    pub fn with_update_timeout(mut self, timeout: u64) -> Self {
        self.update_timeout = timeout;
        self
    }

    /// Sets the shutdown countdown
    pub fn with_shutdown_timeout(mut self, timeout: u64) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    /// Sets the log level
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Timeout for the release feed request
    pub fn update_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.update_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.allow_update_check);
        assert_eq!(config.update_timeout, DEFAULT_UPDATE_TIMEOUT);
        assert_eq!(config.shutdown_timeout, DEFAULT_SHUTDOWN_TIMEOUT);
        assert_eq!(config.product_name, DEFAULT_PRODUCT_NAME);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.scan_dir.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_scan_dir(Some(PathBuf::from("/media/inbox")))
            .with_update_check(false)
            .with_local_version(Some("v1.2.3".to_string()))
            .with_update_timeout(10)
            .with_log_level(LevelFilter::Debug);

        assert_eq!(config.scan_dir, Some(PathBuf::from("/media/inbox")));
        assert!(!config.allow_update_check);
        assert_eq!(config.local_version.as_deref(), Some("v1.2.3"));
        assert_eq!(config.update_timeout_duration(), Duration::from_secs(10));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_local_version_not_cleared_by_none() {
        let config = Config::new()
            .with_local_version(Some("v0.9.0".to_string()))
            .with_local_version(None);
        assert_eq!(config.local_version.as_deref(), Some("v0.9.0"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(CLEAR_LINE, "\r\x1b[K");
        assert_eq!(BANNER_MARGIN, 6);
        assert_eq!(LOG_LEVEL_ENV_VAR, "MEDIASORT_LOG");
    }
}
