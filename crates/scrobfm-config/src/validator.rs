//! Standalone configuration validation entry point.

use crate::schema::Config;
use scrobfm_common::Result;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        config.validate().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_delegates_to_schema() {
        assert!(ConfigValidator::validate(&Config::default()).is_err());

        let mut config = Config::default();
        config.lastfm.api_key = "key".to_string();
        config.lastfm.user = "user".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());
    }
}
