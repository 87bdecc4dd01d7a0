//! LinkedIn adapter — public search index, best effort.

use leadcheck_core::{LeadData, PlatformSignals};

use super::{scrape_search_proxy, SearchProxySpec};
use crate::client::SearchClient;
use crate::error::ScraperError;

const SPEC: SearchProxySpec = SearchProxySpec {
    platform: "linkedin",
    site: "linkedin.com",
    max_results: 25,
    activity_slope: 4,
    presence_note: "Public search results indicate presence on LinkedIn (best-effort).",
    absence_note: "No public LinkedIn signals found.",
};

pub(crate) async fn scrape_linkedin(
    client: &SearchClient,
    search_base_url: &str,
    lead: &LeadData,
) -> Result<PlatformSignals, ScraperError> {
    scrape_search_proxy(client, search_base_url, &SPEC, lead).await
}
