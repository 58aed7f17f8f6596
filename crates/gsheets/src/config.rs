//! Service configuration

use std::time::Duration;

/// Feed listing the spreadsheets visible to the authorized user
pub const DEFAULT_SPREADSHEETS_FEED_URL: &str =
    "https://spreadsheets.google.com/feeds/spreadsheets/private/full";

/// Options for talking to the Spreadsheets API
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct ServiceConfig {
    /// URL of the spreadsheets feed
    pub spreadsheets_feed_url: String,
    /// Headers added to every request (default: `GData-Version: 3.0`)
    pub default_headers: Vec<(String, String)>,
    /// User agent sent by the HTTP executor
    pub user_agent: String,
    /// Whole-request timeout for the HTTP executor (seconds when deserialized)
    #[cfg_attr(feature = "serde", serde(deserialize_with = "duration_secs::deserialize"))]
    pub timeout: Duration,
    /// Ignore proxy settings from the environment
    pub no_proxy: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            spreadsheets_feed_url: DEFAULT_SPREADSHEETS_FEED_URL.to_string(),
            default_headers: vec![("GData-Version".to_string(), "3.0".to_string())],
            user_agent: concat!("gsheets/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            no_proxy: false,
        }
    }
}

impl ServiceConfig {
    /// Add a header sent with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }
}

#[cfg(feature = "serde")]
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(deserializer)?))
    }
}
