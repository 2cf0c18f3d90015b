//! Last.fm API client with pagination, rate limiting, and caching.

use crate::models::{parse_count, RecentTracksResponse};
use crate::timezone::{date_to_api_seconds, host_utc_offset_seconds};
use chrono::NaiveDate;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use scrobfm_common::{EventLog, Result, ScrobError};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, info};

/// Default Last.fm API root.
pub const DEFAULT_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0";

/// Identifiable User-Agent, as the Last.fm API guidelines ask for.
const USER_AGENT: &str = concat!("scrobfm/", env!("CARGO_PKG_VERSION"));

/// The API caps `limit` at 200 results per page.
const MAX_PAGE_SIZE: u32 = 200;

/// Connection settings for [`LastFmClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API root URL.
    pub base_url: String,
    /// Last.fm API key.
    pub api_key: String,
    /// Results per page, clamped to 1..=200.
    pub page_size: u32,
    /// Upper bound on request rate against the API.
    pub requests_per_second: u32,
    /// Maximum number of cached response pages.
    pub cache_capacity: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            page_size: MAX_PAGE_SIZE,
            requests_per_second: 4,
            cache_capacity: 256,
        }
    }
}

/// Last.fm API client.
///
/// Wraps a pooled [`reqwest::Client`] with a request rate limiter (the
/// API dislikes bursts) and a page cache keyed by query, so repeated
/// analysis runs over the same date range skip the network.
pub struct LastFmClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    page_size: u32,
    utc_offset_seconds: i32,
    limiter: DefaultDirectRateLimiter,
    cache: moka::future::Cache<String, Arc<RecentTracksResponse>>,
}

impl LastFmClient {
    /// Creates a new client, sampling the host's UTC offset once.
    pub fn new(options: ClientOptions) -> Self {
        let rate = NonZeroU32::new(options.requests_per_second).unwrap_or(NonZeroU32::MIN);

        Self {
            client: reqwest::Client::new(),
            base_url: options.base_url,
            api_key: options.api_key,
            page_size: options.page_size.clamp(1, MAX_PAGE_SIZE),
            utc_offset_seconds: host_utc_offset_seconds(),
            limiter: RateLimiter::direct(Quota::per_second(rate)),
            cache: moka::future::Cache::builder()
                .max_capacity(options.cache_capacity)
                .build(),
        }
    }

    /// The UTC offset applied to day boundaries and scrobble timestamps.
    pub fn utc_offset_seconds(&self) -> i32 {
        self.utc_offset_seconds
    }

    /// Fetches one page of the user's recent tracks within
    /// `[from, to)`, in local calendar days.
    ///
    /// Cached pages are returned without touching the network or the
    /// rate limiter.
    pub async fn recent_tracks_page(
        &self,
        user: &str,
        from: NaiveDate,
        to: NaiveDate,
        page: u32,
    ) -> Result<Arc<RecentTracksResponse>> {
        let key = format!("{user}:{from}:{to}:{page}");

        self.cache
            .try_get_with(key, async {
                self.fetch_page(user, from, to, page).await.map(Arc::new)
            })
            .await
            .map_err(|err: Arc<ScrobError>| ScrobError::LastFm(err.to_string()).into())
    }

    /// Fetches the user's complete scrobble history within `[from, to)`
    /// and normalizes it into an [`EventLog`].
    ///
    /// Pagination follows the `totalPages` counter; "now playing"
    /// entries are dropped. The resulting log is in API delivery order,
    /// newest first.
    pub async fn fetch_history(&self, user: &str, from: NaiveDate, to: NaiveDate) -> Result<EventLog> {
        info!(user, %from, %to, "fetching scrobble history");

        let mut events = Vec::new();
        let mut page = 1u32;

        loop {
            let response = self.recent_tracks_page(user, from, to, page).await?;
            let page_data = &response.recenttracks;
            let total_pages = parse_count(&page_data.attr.total_pages, "totalPages")?.max(1);

            debug!(page, total_pages, tracks = page_data.track.len(), "fetched history page");

            for entry in &page_data.track {
                if entry.is_now_playing() {
                    continue;
                }
                events.push(entry.to_event(self.utc_offset_seconds)?);
            }

            if page >= total_pages {
                break;
            }
            page += 1;
        }

        info!(scrobbles = events.len(), "scrobble history fetched");
        Ok(EventLog::new(events))
    }

    async fn fetch_page(
        &self,
        user: &str,
        from: NaiveDate,
        to: NaiveDate,
        page: u32,
    ) -> std::result::Result<RecentTracksResponse, ScrobError> {
        self.limiter.until_ready().await;

        let from_seconds = date_to_api_seconds(from, self.utc_offset_seconds);
        // End of the day before `to`, keeping the interval half-open.
        let to_seconds = date_to_api_seconds(to, self.utc_offset_seconds) - 1;

        let response = self
            .client
            .get(&self.base_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("method", "user.getrecenttracks"),
                ("user", user),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
                ("from", from_seconds.to_string().as_str()),
                ("to", to_seconds.to_string().as_str()),
                ("limit", self.page_size.to_string().as_str()),
                ("page", page.to_string().as_str()),
            ])
            .send()
            .await
            .map_err(|err| ScrobError::LastFm(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScrobError::LastFm(format!(
                "server returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|err| ScrobError::LastFm(format!("malformed response body: {err}")))
    }
}
