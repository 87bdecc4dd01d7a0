//! Per-platform minimum-interval rate limiting.
//!
//! Last-call instants are process-wide and keyed by platform name, so
//! concurrent verification requests for different leads still serialize
//! against the same per-platform spacing.

use std::collections::HashMap;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};

/// Serialized per-key rate limiter enforcing a fixed minimum interval
/// between dispatches to the same platform.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    min_interval: Duration,
    next_slot: Mutex<HashMap<String, Instant>>,
}

impl RateLimiter {
    pub(crate) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: Mutex::new(HashMap::new()),
        }
    }

    /// Wait until this platform's next dispatch slot.
    ///
    /// Each caller reserves a slot while holding the lock, so concurrent
    /// callers for the same platform queue up `min_interval` apart rather
    /// than all firing after the same delay.
    pub(crate) async fn wait_if_needed(&self, platform: &str) {
        let fire_at = {
            let mut slots = self.next_slot.lock().await;
            let now = Instant::now();
            let fire_at = match slots.get(platform) {
                Some(&prev) if prev + self.min_interval > now => prev + self.min_interval,
                _ => now,
            };
            slots.insert(platform.to_owned(), fire_at);
            fire_at
        };

        if fire_at > Instant::now() {
            tracing::debug!(platform, "rate limit: waiting for next dispatch slot");
        }
        sleep_until(fire_at).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_call_does_not_wait() {
        let limiter = RateLimiter::new(Duration::from_millis(2000));
        let start = Instant::now();
        limiter.wait_if_needed("x").await;
        assert_eq!(Instant::now(), start);
    }

    #[tokio::test(start_paused = true)]
    async fn second_call_waits_for_minimum_interval() {
        let limiter = RateLimiter::new(Duration::from_millis(2000));
        let start = Instant::now();
        limiter.wait_if_needed("x").await;
        limiter.wait_if_needed("x").await;
        assert_eq!(Instant::now() - start, Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn different_platforms_do_not_serialize() {
        let limiter = RateLimiter::new(Duration::from_millis(2000));
        let start = Instant::now();
        limiter.wait_if_needed("x").await;
        limiter.wait_if_needed("reddit").await;
        assert_eq!(Instant::now(), start);
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_interval_clears_the_wait() {
        let limiter = RateLimiter::new(Duration::from_millis(2000));
        limiter.wait_if_needed("x").await;
        tokio::time::sleep(Duration::from_millis(2500)).await;
        let before = Instant::now();
        limiter.wait_if_needed("x").await;
        assert_eq!(Instant::now(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_callers_queue_in_slots() {
        use std::sync::Arc;

        let limiter = Arc::new(RateLimiter::new(Duration::from_millis(2000)));
        let start = Instant::now();

        let a = Arc::clone(&limiter);
        let b = Arc::clone(&limiter);
        let c = Arc::clone(&limiter);
        let (ta, tb, tc) = tokio::join!(
            tokio::spawn(async move {
                a.wait_if_needed("x").await;
                Instant::now()
            }),
            tokio::spawn(async move {
                b.wait_if_needed("x").await;
                Instant::now()
            }),
            tokio::spawn(async move {
                c.wait_if_needed("x").await;
                Instant::now()
            }),
        );

        let mut done: Vec<Duration> = [ta.unwrap(), tb.unwrap(), tc.unwrap()]
            .iter()
            .map(|t| *t - start)
            .collect();
        done.sort_unstable();
        assert_eq!(done[0], Duration::from_millis(0));
        assert_eq!(done[1], Duration::from_millis(2000));
        assert_eq!(done[2], Duration::from_millis(4000));
    }
}
