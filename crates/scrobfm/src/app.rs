//! Application orchestration: config, client, analyzer, and output.

use crate::cli::Command;
use crate::error::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use scrobfm_common::parse_date;
use scrobfm_config::{apply_env_overrides, Config, ConfigCache, ConfigLoader, ConfigValidator};
use scrobfm_lastfm::{ClientOptions, LastFmClient};
use scrobfm_stats::{Analyzer, Category, Period, RankedRow};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// The assembled application.
pub struct App {
    cache: ConfigCache,
}

impl App {
    /// Loads configuration from the given path (falling back to
    /// defaults when absent) and applies environment overrides.
    pub async fn from_config_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let loader = ConfigLoader::new(path.as_ref());
        let mut config = loader.load_or_default().await?;
        apply_env_overrides(&mut config);

        Ok(Self {
            cache: ConfigCache::new(config),
        })
    }

    /// Wraps an already-built configuration; used by tests.
    pub fn with_config(config: Config) -> Self {
        Self {
            cache: ConfigCache::new(config),
        }
    }

    /// Runs one command and returns the report to print.
    pub async fn run(&self, command: Command) -> AppResult<String> {
        match command {
            Command::Highlights { period, date, user } => {
                let period: Period = period.parse()?;
                let anchor = resolve_anchor(date.as_deref())?;
                let analyzer = self.build_analyzer(user).await?;

                Ok(analyzer.summary_text(period, anchor))
            }
            Command::Top {
                period,
                category,
                date,
                limit,
                user,
            } => {
                let period: Period = period.parse()?;
                let category: Category = category.parse()?;
                let anchor = resolve_anchor(date.as_deref())?;
                let analyzer = self.build_analyzer(user).await?;

                let rows = analyzer.top_by(period, category, anchor);
                Ok(render_ranking(&rows, period, category, anchor, limit))
            }
        }
    }

    /// Validates the effective configuration and fetches the user's
    /// history into an analyzer.
    async fn build_analyzer(&self, user: Option<String>) -> AppResult<Analyzer> {
        let config = self.cache.snapshot_with_user(user.as_deref());
        if config.lastfm.user.is_empty() {
            return Err(AppError::MissingUser.into());
        }
        ConfigValidator::validate(&config)?;

        let client = LastFmClient::new(ClientOptions {
            base_url: config.lastfm.url.clone(),
            api_key: config.lastfm.api_key.clone(),
            page_size: config.data.page_size,
            requests_per_second: config.rate_limiting.requests_per_second,
            cache_capacity: config.rate_limiting.cache_capacity,
        });

        let from = config.data.from_date()?;
        let to = Local::now().date_naive();
        let log = client.fetch_history(&config.lastfm.user, from, to).await?;

        info!(user = %config.lastfm.user, scrobbles = log.len(), "history ready for analysis");
        Ok(Analyzer::new(log))
    }
}

/// Parses the anchor date argument, defaulting to today.
fn resolve_anchor(date: Option<&str>) -> AppResult<NaiveDate> {
    match date {
        Some(text) => Ok(parse_date(text)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// Renders a ranking as a numbered plain-text list.
pub fn render_ranking(
    rows: &[RankedRow],
    period: Period,
    category: Category,
    anchor: NaiveDate,
    limit: usize,
) -> String {
    let mut out = format!("--Top {category}s ({period} of {anchor})--\n");

    if rows.is_empty() {
        out.push_str("No scrobbles in this period.");
        return out;
    }

    for (index, row) in rows.iter().take(limit).enumerate() {
        let entry = match category {
            Category::Artist => row.artist.clone(),
            Category::Album => format!(
                "{} by {}",
                row.album.as_deref().unwrap_or("-"),
                row.artist
            ),
            Category::Track => format!(
                "{} from {} by {}",
                row.track.as_deref().unwrap_or("-"),
                row.album.as_deref().unwrap_or("-"),
                row.artist
            ),
        };
        let _ = writeln!(out, "{:>2}. {} - {} scrobbles", index + 1, entry, row.count);
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrobfm_common::test_utils::mock_date;

    fn row(artist: &str, album: Option<&str>, track: Option<&str>, count: u64) -> RankedRow {
        RankedRow {
            artist: artist.to_string(),
            album: album.map(str::to_string),
            track: track.map(str::to_string),
            count,
        }
    }

    #[test]
    fn test_resolve_anchor() {
        assert_eq!(
            resolve_anchor(Some("2024-01-15")).unwrap(),
            mock_date(2024, 1, 15)
        );
        assert!(resolve_anchor(Some("not-a-date")).is_err());
        assert!(resolve_anchor(None).is_ok());
    }

    #[test]
    fn test_render_artist_ranking() {
        let rows = vec![
            row("Radiohead", None, None, 12),
            row("Portishead", None, None, 7),
        ];
        let text = render_ranking(
            &rows,
            Period::Month,
            Category::Artist,
            mock_date(2024, 1, 15),
            10,
        );

        assert!(text.starts_with("--Top artists (month of 2024-01-15)--"));
        assert!(text.contains(" 1. Radiohead - 12 scrobbles"));
        assert!(text.contains(" 2. Portishead - 7 scrobbles"));
    }

    #[test]
    fn test_render_respects_limit() {
        let rows: Vec<RankedRow> = (0..20)
            .map(|i| row(&format!("artist{i}"), None, None, 20 - i))
            .collect();
        let text = render_ranking(
            &rows,
            Period::Week,
            Category::Artist,
            mock_date(2024, 1, 15),
            5,
        );
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_render_empty_ranking() {
        let text = render_ranking(
            &[],
            Period::Year,
            Category::Track,
            mock_date(2024, 1, 15),
            10,
        );
        assert!(text.contains("No scrobbles in this period."));
    }

    #[tokio::test]
    async fn test_build_analyzer_requires_user() {
        let app = App::with_config(Config::default());
        let err = app
            .run(Command::Top {
                period: "week".to_string(),
                category: "artist".to_string(),
                date: Some("2024-01-15".to_string()),
                limit: 10,
                user: None,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no Last.fm user"));
    }

    #[tokio::test]
    async fn test_run_rejects_unknown_period() {
        let app = App::with_config(Config::default());
        let err = app
            .run(Command::Highlights {
                period: "decade".to_string(),
                date: None,
                user: Some("someone".to_string()),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("period should be"));
    }
}
