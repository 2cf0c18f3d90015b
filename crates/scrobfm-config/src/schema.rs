//! Configuration schema definitions using serde.

use chrono::NaiveDate;
use scrobfm_common::{parse_date, ScrobError};
use serde::{Deserialize, Serialize};

/// Main configuration structure for scrobfm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Last.fm API configuration.
    pub lastfm: LastFmConfig,
    /// History fetch configuration.
    pub data: DataConfig,
    /// Rate limiting and caching configuration.
    pub rate_limiting: RateLimitingConfig,
}

/// Last.fm API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastFmConfig {
    /// Last.fm API key.
    pub api_key: String,
    /// Last.fm API root URL.
    pub url: String,
    /// Last.fm username whose history is analyzed.
    pub user: String,
}

/// History fetch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// First day of history to fetch, `YYYY-MM-DD`.
    pub from_date: String,
    /// Results per API page (1..=200).
    pub page_size: u32,
}

/// Rate limiting and caching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitingConfig {
    /// Upper bound on API requests per second.
    pub requests_per_second: u32,
    /// Maximum number of cached response pages.
    pub cache_capacity: u64,
}

impl DataConfig {
    /// The configured fetch start as a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`ScrobError::Config`] when `from_date` is not a valid
    /// `YYYY-MM-DD` date.
    pub fn from_date(&self) -> Result<NaiveDate, ScrobError> {
        parse_date(&self.from_date)
            .map_err(|_| ScrobError::Config(format!("invalid from_date '{}'", self.from_date)))
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScrobError::Config`] describing the first violated
    /// constraint.
    pub fn validate(&self) -> Result<(), ScrobError> {
        if self.lastfm.api_key.is_empty() {
            return Err(ScrobError::Config(
                "Last.fm API key cannot be empty".to_string(),
            ));
        }

        if self.lastfm.user.is_empty() {
            return Err(ScrobError::Config(
                "Last.fm user cannot be empty".to_string(),
            ));
        }

        if self.lastfm.url.is_empty() {
            return Err(ScrobError::Config(
                "Last.fm URL cannot be empty".to_string(),
            ));
        }

        if !(1..=200).contains(&self.data.page_size) {
            return Err(ScrobError::Config(format!(
                "page_size must be between 1 and 200, got {}",
                self.data.page_size
            )));
        }

        self.data.from_date()?;

        Ok(())
    }
}
