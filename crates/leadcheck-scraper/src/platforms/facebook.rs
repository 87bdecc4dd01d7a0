//! Facebook adapter — public search index, best effort.

use leadcheck_core::{LeadData, PlatformSignals};

use super::{scrape_search_proxy, SearchProxySpec};
use crate::client::SearchClient;
use crate::error::ScraperError;

const SPEC: SearchProxySpec = SearchProxySpec {
    platform: "facebook",
    site: "facebook.com",
    max_results: 20,
    activity_slope: 4,
    presence_note: "Public search results indicate presence on Facebook (best-effort).",
    absence_note: "No public Facebook signals found.",
};

pub(crate) async fn scrape_facebook(
    client: &SearchClient,
    search_base_url: &str,
    lead: &LeadData,
) -> Result<PlatformSignals, ScraperError> {
    scrape_search_proxy(client, search_base_url, &SPEC, lead).await
}
