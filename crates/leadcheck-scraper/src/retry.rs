//! Bounded retries with linear backoff for adapter calls.
//!
//! Every adapter error is transient from the coordinator's point of view:
//! the sources are untrusted, frequently-failing public endpoints, and a
//! failed platform degrades to a placeholder record anyway. So unlike a
//! budgeted API client there is no retriable/non-retriable split here.

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

/// Run `operation` up to `max_attempts` times, sleeping
/// `backoff_base × attempt-number` between attempts.
///
/// Returns the first success, or the last error once attempts are exhausted.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_attempts: u32,
    backoff_base: Duration,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                let delay = backoff_base * attempt;
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "scrape attempt failed; retrying after backoff"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
