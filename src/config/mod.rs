//! Configuration for the registry client.

use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://formservicebynavin.onrender.com";

/// Rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 17;

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the registry client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Base URL of the person API, without trailing slash
    pub api_base_url: String,
    /// Number of rows shown on one table page
    pub page_size: usize,
    /// Timeout applied to every API request
    pub request_timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RegistryConfig {
    /// Build a configuration from the environment, falling back to defaults
    /// for unset or unparsable values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("PERSON_REGISTRY_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let page_size = lookup("PERSON_REGISTRY_PAGE_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.page_size);

        let request_timeout = lookup("PERSON_REGISTRY_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&n| n > 0)
            .map_or(defaults.request_timeout, Duration::from_secs);

        Self {
            api_base_url,
            page_size,
            request_timeout,
        }
        .normalized()
    }

    /// Override the API base URL
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalized()
    }

    /// Override the page size; zero is ignored
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    fn normalized(mut self) -> Self {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        self
    }
}
