//! X (Twitter) adapter — public search index, best effort.

use leadcheck_core::{LeadData, PlatformSignals};

use super::{scrape_search_proxy, SearchProxySpec};
use crate::client::SearchClient;
use crate::error::ScraperError;

const SPEC: SearchProxySpec = SearchProxySpec {
    platform: "x",
    site: "x.com",
    max_results: 25,
    activity_slope: 6,
    presence_note: "Public search results indicate presence on X (best-effort).",
    absence_note: "No public X signals found.",
};

pub(crate) async fn scrape_x(
    client: &SearchClient,
    search_base_url: &str,
    lead: &LeadData,
) -> Result<PlatformSignals, ScraperError> {
    scrape_search_proxy(client, search_base_url, &SPEC, lead).await
}
