//! Default configuration values.

use crate::schema::{Config, DataConfig, LastFmConfig, RateLimitingConfig};

impl Default for Config {
    fn default() -> Self {
        Self {
            lastfm: LastFmConfig::default(),
            data: DataConfig::default(),
            rate_limiting: RateLimitingConfig::default(),
        }
    }
}

impl Default for LastFmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            url: "https://ws.audioscrobbler.com/2.0".to_string(),
            user: String::new(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            from_date: "2018-01-01".to_string(),
            page_size: 200,
        }
    }
}

impl Default for RateLimitingConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 4,
            cache_capacity: 256,
        }
    }
}
