//! Reddit adapter — native JSON search API, filtered to the lead's
//! history window.

use chrono::Utc;
use leadcheck_core::{Confidence, LeadData, PlatformSignals};
use serde::Deserialize;

use crate::client::SearchClient;
use crate::error::ScraperError;
use crate::extract::keyword_signals;

const REDDIT_USER_AGENT: &str = "leadcheck/0.1 (lead verification tool)";
const SEARCH_LIMIT: u32 = 25;
const MAX_TITLE_DATA_POINTS: usize = 5;

/// Reddit search listing wrapper.
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: Post,
}

#[derive(Debug, Deserialize)]
struct Post {
    #[serde(default)]
    created_utc: f64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    num_comments: f64,
    #[serde(default)]
    subreddit: String,
}

/// Search Reddit for recent posts mentioning the lead and company.
///
/// Unlike the search-proxy adapters, a non-200 API response yields a zeroed
/// record with an explanatory data point instead of an error; Reddit blocks
/// unauthenticated search often enough that it is treated as an expected
/// outcome rather than a retriable failure.
///
/// # Errors
///
/// Returns [`ScraperError::Http`] on network failure and
/// [`ScraperError::Deserialize`] if a 200 response does not parse.
pub(crate) async fn scrape_reddit(
    client: &SearchClient,
    reddit_base_url: &str,
    lead: &LeadData,
) -> Result<PlatformSignals, ScraperError> {
    let query = format!("{} {}", lead.name, lead.company);
    let url = format!("{}/search.json", reddit_base_url.trim_end_matches('/'));
    let limit = SEARCH_LIMIT.to_string();

    let response = client
        .http()
        .get(&url)
        .header(reqwest::header::USER_AGENT, REDDIT_USER_AGENT)
        .query(&[
            ("q", query.as_str()),
            ("limit", limit.as_str()),
            ("sort", "new"),
        ])
        .send()
        .await?;

    if response.status() != reqwest::StatusCode::OK {
        tracing::warn!(status = %response.status(), "Reddit search unavailable");
        let mut signals = PlatformSignals::empty("reddit");
        signals.data_points = vec!["Reddit search unavailable or blocked".to_owned()];
        return Ok(signals);
    }

    let body = response.text().await?;
    let listing: Listing =
        serde_json::from_str(&body).map_err(|source| ScraperError::Deserialize {
            context: "Reddit search listing".to_owned(),
            source,
        })?;

    let cutoff = (Utc::now() - chrono::Duration::days(lead.history_window.days())).timestamp();
    #[allow(clippy::cast_precision_loss)]
    let posts: Vec<Post> = listing
        .data
        .children
        .into_iter()
        .map(|c| c.data)
        .filter(|p| p.created_utc >= cutoff as f64)
        .collect();

    let combined_text = posts
        .iter()
        .map(|p| format!("{} {}", p.title, p.selftext).trim().to_owned())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    let signals = keyword_signals(&combined_text);

    // Per-post engagement is score*0.3 + comments*2, capped at 100, averaged.
    let engagement_sum: f64 = posts
        .iter()
        .map(|p| (p.score * 0.3 + p.num_comments * 2.0).min(100.0))
        .sum();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let engagement_score = if posts.is_empty() {
        0
    } else {
        ((engagement_sum / posts.len() as f64).round() as u32).min(100)
    };

    let recent_count = u32::try_from(posts.len()).unwrap_or(u32::MAX);
    tracing::debug!(recent_count, "collected Reddit signals");

    Ok(PlatformSignals {
        platform: "reddit".to_owned(),
        activity_score: recent_count.saturating_mul(8).min(100),
        hiring_signals: signals.hiring,
        growth_signals: signals.growth,
        engagement_score,
        recent_posts_count: recent_count,
        confidence: if recent_count > 0 {
            Confidence::High
        } else {
            Confidence::Low
        },
        data_points: posts
            .iter()
            .take(MAX_TITLE_DATA_POINTS)
            .map(|p| format!("r/{}: {}", p.subreddit, p.title))
            .collect(),
        timestamp: Utc::now(),
    })
}
