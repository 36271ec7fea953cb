use serde::{Deserialize, Serialize};
use std::env;

/// Base URL of the hosted databank service.
pub const DEFAULT_BASE_URL: &str = "https://api.databank.dev";

/// Environment variable consulted by [`DatabankConfig::default`].
pub const BASE_URL_ENV: &str = "DATABANK_BASE_URL";

/// Connection settings for the databank API.
///
/// Threaded explicitly into [`DatabankClient`](crate::client::DatabankClient)
/// rather than living in process-wide state; embed it in an application's
/// own config file if one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabankConfig {
    /// Endpoint base, without a trailing slash.
    pub base_url: String,
}

impl DatabankConfig {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for DatabankConfig {
    fn default() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }
}
