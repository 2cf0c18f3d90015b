//! Environment variable overrides for credentials and endpoints.

use crate::schema::Config;
use std::env;
use tracing::debug;

/// Environment variable holding the Last.fm API key.
pub const ENV_API_KEY: &str = "LASTFM_API_KEY";
/// Environment variable holding the Last.fm username.
pub const ENV_USER: &str = "LASTFM_USER";
/// Environment variable overriding the API root URL.
pub const ENV_URL: &str = "LASTFM_URL";

/// Applies environment overrides on top of a loaded configuration.
///
/// Credentials usually live in the environment rather than on disk;
/// anything set there wins over the file.
pub fn apply_env_overrides(config: &mut Config) {
    if let Ok(api_key) = env::var(ENV_API_KEY) {
        debug!("using API key from {ENV_API_KEY}");
        config.lastfm.api_key = api_key;
    }

    if let Ok(user) = env::var(ENV_USER) {
        debug!("using user from {ENV_USER}");
        config.lastfm.user = user;
    }

    if let Ok(url) = env::var(ENV_URL) {
        debug!("using URL from {ENV_URL}");
        config.lastfm.url = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_file_values() {
        // Env mutation is process-wide; keep it to one test.
        env::set_var(ENV_API_KEY, "env_key");
        env::set_var(ENV_USER, "env_user");
        env::remove_var(ENV_URL);

        let mut config = Config::default();
        config.lastfm.api_key = "file_key".to_string();
        let url_before = config.lastfm.url.clone();

        apply_env_overrides(&mut config);

        assert_eq!(config.lastfm.api_key, "env_key");
        assert_eq!(config.lastfm.user, "env_user");
        assert_eq!(config.lastfm.url, url_before);

        env::remove_var(ENV_API_KEY);
        env::remove_var(ENV_USER);
    }
}
