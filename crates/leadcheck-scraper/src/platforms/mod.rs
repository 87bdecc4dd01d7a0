//! Platform adapters.
//!
//! Each adapter maps a lead's name/company to one platform-scoped query and
//! returns a normalized [`PlatformSignals`] record. Four platforms are
//! JS-heavy and are read through a public search index instead; Reddit
//! exposes a JSON search API and is queried directly.

mod facebook;
mod instagram;
mod linkedin;
mod reddit;
mod x;

pub(crate) use facebook::scrape_facebook;
pub(crate) use instagram::scrape_instagram;
pub(crate) use linkedin::scrape_linkedin;
pub(crate) use reddit::scrape_reddit;
pub(crate) use x::scrape_x;

use chrono::Utc;
use leadcheck_core::{Confidence, LeadData, PlatformSignals};

use crate::client::SearchClient;
use crate::error::ScraperError;
use crate::extract::{
    count_result_anchors, engagement_score_from_text, keyword_signals, search_url,
    strip_html_text,
};

/// Fixed per-platform query strategy for the search-proxy adapters.
pub(super) struct SearchProxySpec {
    /// Signal-map key, e.g. `"x"`.
    pub(super) platform: &'static str,
    /// Site restriction for the query, e.g. `"x.com"`.
    pub(super) site: &'static str,
    /// Cap on result anchors counted as recent posts.
    pub(super) max_results: u32,
    /// Activity points per counted result.
    pub(super) activity_slope: u32,
    pub(super) presence_note: &'static str,
    pub(super) absence_note: &'static str,
}

/// Shared flow for the search-proxy platforms: build a site-restricted query,
/// fetch the result page, extract keyword signals, and approximate activity
/// from the number of result anchors.
pub(super) async fn scrape_search_proxy(
    client: &SearchClient,
    search_base_url: &str,
    spec: &SearchProxySpec,
    lead: &LeadData,
) -> Result<PlatformSignals, ScraperError> {
    let query = format!("site:{} {} {}", spec.site, lead.name, lead.company);
    let url = search_url(search_base_url, &query);
    let html = client.fetch_html(&url).await?;

    let text = strip_html_text(&html);
    let signals = keyword_signals(&text);

    let recent_posts = count_result_anchors(&html).min(spec.max_results);
    tracing::debug!(
        platform = spec.platform,
        recent_posts,
        "collected search-proxy signals"
    );

    let data_points = if recent_posts > 0 {
        vec![spec.presence_note.to_owned()]
    } else {
        vec![spec.absence_note.to_owned()]
    };

    Ok(PlatformSignals {
        platform: spec.platform.to_owned(),
        activity_score: (recent_posts * spec.activity_slope).min(100),
        hiring_signals: signals.hiring,
        growth_signals: signals.growth,
        engagement_score: engagement_score_from_text(&text),
        recent_posts_count: recent_posts,
        confidence: if recent_posts > 0 {
            Confidence::Medium
        } else {
            Confidence::Low
        },
        data_points,
        timestamp: Utc::now(),
    })
}
