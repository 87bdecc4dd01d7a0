//! Fan-out/fan-in coordinator over the five platform adapters.
//!
//! Per-platform policy, composed in order: rate limit, bounded retries with
//! linear backoff, a deadline race, and isolation of any surviving error to
//! a zeroed placeholder record. Partial failure of any subset of platforms
//! never fails the batch; the returned map always carries one entry per
//! configured platform.

use std::time::Duration;

use leadcheck_core::{AppConfig, LeadData, PlatformSignals, SignalMap, PLATFORMS};

use crate::client::SearchClient;
use crate::error::ScraperError;
use crate::platforms::{
    scrape_facebook, scrape_instagram, scrape_linkedin, scrape_reddit, scrape_x,
};
use crate::rate_limit::RateLimiter;
use crate::retry::retry_with_backoff;

/// Scraping policy knobs, usually derived from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub search_base_url: String,
    pub reddit_base_url: String,
    /// Per-request HTTP timeout for a single fetch.
    pub request_timeout: Duration,
    /// Total per-platform deadline racing the retry-wrapped call.
    pub scrape_timeout: Duration,
    /// Minimum spacing between calls to the same platform.
    pub min_request_interval: Duration,
    pub max_retries: u32,
    pub retry_backoff_base: Duration,
}

impl ScrapeConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            search_base_url: config.search_base_url.clone(),
            reddit_base_url: config.reddit_base_url.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            scrape_timeout: Duration::from_secs(config.scrape_timeout_secs),
            min_request_interval: Duration::from_millis(config.min_request_interval_ms),
            max_retries: config.max_retries,
            retry_backoff_base: Duration::from_millis(config.retry_backoff_base_ms),
        }
    }
}

/// Runs all five adapters for one lead and always returns a complete
/// [`SignalMap`]. Rate-limit state is process-wide for the lifetime of the
/// coordinator, so concurrent requests serialize per platform.
pub struct ScrapeCoordinator {
    client: SearchClient,
    limiter: RateLimiter,
    config: ScrapeConfig,
}

impl ScrapeCoordinator {
    /// Build a coordinator with its own HTTP client and rate-limit state.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ScrapeConfig) -> Result<Self, ScraperError> {
        let client = SearchClient::new(config.request_timeout)?;
        let limiter = RateLimiter::new(config.min_request_interval);
        Ok(Self {
            client,
            limiter,
            config,
        })
    }

    /// Scrape all platforms concurrently and wait for every slot to settle.
    ///
    /// `max_wait` overrides the configured per-platform deadline. The lead is
    /// never mutated; failures degrade to placeholder records.
    pub async fn scrape_all(&self, lead: &LeadData, max_wait: Option<Duration>) -> SignalMap {
        let deadline = max_wait.unwrap_or(self.config.scrape_timeout);

        let (x, reddit, instagram, linkedin, facebook) = tokio::join!(
            self.run_platform("x", lead, deadline),
            self.run_platform("reddit", lead, deadline),
            self.run_platform("instagram", lead, deadline),
            self.run_platform("linkedin", lead, deadline),
            self.run_platform("facebook", lead, deadline),
        );

        let mut map = SignalMap::new();
        for (platform, signals) in [x, reddit, instagram, linkedin, facebook] {
            map.insert(platform, signals);
        }
        debug_assert_eq!(map.len(), PLATFORMS.len());
        map
    }

    /// Run one platform under the full policy stack. Never errors: anything
    /// surviving retry and the deadline is replaced by a placeholder.
    async fn run_platform(
        &self,
        platform: &'static str,
        lead: &LeadData,
        deadline: Duration,
    ) -> (String, PlatformSignals) {
        self.limiter.wait_if_needed(platform).await;

        let attempt = retry_with_backoff(
            self.config.max_retries,
            self.config.retry_backoff_base,
            || self.dispatch(platform, lead),
        );

        // The losing side of the race is dropped, which abandons any
        // in-flight retry for this platform.
        let result = match tokio::time::timeout(deadline, attempt).await {
            Ok(result) => result,
            Err(_) => Err(ScraperError::Timeout {
                platform: platform.to_owned(),
                secs: deadline.as_secs(),
            }),
        };

        match result {
            Ok(signals) => (platform.to_owned(), signals),
            Err(error) => {
                tracing::warn!(
                    platform,
                    error = %error,
                    "platform scrape failed; substituting empty signals"
                );
                (platform.to_owned(), PlatformSignals::empty(platform))
            }
        }
    }

    async fn dispatch(
        &self,
        platform: &'static str,
        lead: &LeadData,
    ) -> Result<PlatformSignals, ScraperError> {
        let search = self.config.search_base_url.as_str();
        match platform {
            "x" => scrape_x(&self.client, search, lead).await,
            "reddit" => scrape_reddit(&self.client, &self.config.reddit_base_url, lead).await,
            "instagram" => scrape_instagram(&self.client, search, lead).await,
            "linkedin" => scrape_linkedin(&self.client, search, lead).await,
            "facebook" => scrape_facebook(&self.client, search, lead).await,
            other => unreachable!("unknown platform {other}"),
        }
    }
}
