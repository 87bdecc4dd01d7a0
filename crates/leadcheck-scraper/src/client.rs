//! Outbound HTTP client shared by the platform adapters.

use std::time::Duration;

use reqwest::header;

use crate::error::ScraperError;

/// Realistic browser identity; JS-heavy platforms are reached through a
/// public search index, and the proxy expects a browser-shaped request.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// HTTP client with a bounded per-request timeout.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
}

impl SearchClient {
    /// Build a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying client cannot be built.
    pub fn new(request_timeout: Duration) -> Result<Self, ScraperError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { http })
    }

    /// Fetch an HTML page with a browser identity.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] on network failure and
    /// [`ScraperError::UnexpectedStatus`] on a non-2xx response, so the
    /// coordinator's retry wrapper can act on either.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .http
            .get(url)
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(header::ACCEPT, HTML_ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }

    /// Raw client for adapters that speak JSON APIs directly.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
