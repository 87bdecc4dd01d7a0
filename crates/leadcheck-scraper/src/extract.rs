//! Shared text and keyword extraction over scraped pages.
//!
//! The pattern sets are deliberately small and substring-based: the adapters
//! read noisy search-result pages, and precision comes from the scorer's
//! aggregation rather than from the individual matches.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;

/// Keyword-derived hiring and growth evidence for one page of text.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct KeywordSignals {
    pub(crate) hiring: Vec<String>,
    pub(crate) growth: Vec<String>,
}

/// Strip markup from an HTML body and collapse whitespace.
pub(crate) fn strip_html_text(html: &str) -> String {
    let blocks = Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)>")
        .expect("valid block regex");
    let tags = Regex::new(r"(?s)<[^>]*>").expect("valid tag regex");
    let spaces = Regex::new(r"\s+").expect("valid whitespace regex");

    let without_blocks = blocks.replace_all(html, " ");
    let without_tags = tags.replace_all(&without_blocks, " ");
    spaces.replace_all(&without_tags, " ").trim().to_owned()
}

/// Run the fixed hiring/growth pattern sets over extracted text.
pub(crate) fn keyword_signals(text: &str) -> KeywordSignals {
    let mut signals = KeywordSignals::default();

    let matches = |pattern: &str| {
        Regex::new(&format!("(?i){pattern}"))
            .expect("valid keyword regex")
            .is_match(text)
    };

    if matches("(we're hiring|we are hiring|hiring now|open roles|job openings|careers? page)") {
        signals.hiring.push("Hiring language detected".to_owned());
    }
    if matches("(join us|come work with us)") {
        signals
            .hiring
            .push("\"Join us\" hiring call-to-action detected".to_owned());
    }

    if matches("(funding|raised|series [a-f]|seed round|venture capital)") {
        signals
            .growth
            .push("Funding/financing signals detected".to_owned());
    }
    if matches("(launch|released|new product|beta|general availability|ga)") {
        signals
            .growth
            .push("Product launch/release signals detected".to_owned());
    }
    if matches("(partnership|partnered with|collaboration|integration)") {
        signals
            .growth
            .push("Partnership/integration signals detected".to_owned());
    }
    if matches("(expanding|growth|scaling|new market|market expansion)") {
        signals
            .growth
            .push("Expansion/growth language detected".to_owned());
    }

    signals
}

/// Estimate engagement from engagement-related vocabulary: each category
/// contributes a fixed point value, summed and clamped to `[0, 100]`.
pub(crate) fn engagement_score_from_text(text: &str) -> u32 {
    let matches = |pattern: &str| {
        Regex::new(&format!("(?i){pattern}"))
            .expect("valid engagement regex")
            .is_match(text)
    };

    let mut score = 0u32;
    if matches("(likes?|upvotes?)") {
        score += 20;
    }
    if matches("(comments?|repl(y|ies))") {
        score += 25;
    }
    if matches("(retweet|repost|shares?)") {
        score += 20;
    }
    if matches("(views?|impressions)") {
        score += 15;
    }
    score.min(100)
}

/// DuckDuckGo HTML-endpoint search URL for a query.
pub(crate) fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/html/?q={}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(query, NON_ALPHANUMERIC)
    )
}

/// Number of distinct result anchors on a search page; approximates how
/// many public hits exist for the query.
pub(crate) fn count_result_anchors(html: &str) -> u32 {
    u32::try_from(html.matches("result__a").count()).unwrap_or(u32::MAX)
}
