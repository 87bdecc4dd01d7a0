//! Best-effort scraping of public platforms for lead verification.
//!
//! Five fixed platform adapters (X, Reddit, Instagram, LinkedIn, Facebook)
//! turn a lead's name/company into platform-scoped queries and extract
//! normalized [`leadcheck_core::PlatformSignals`]. The [`ScrapeCoordinator`]
//! fans out over all adapters concurrently under per-platform rate limiting,
//! retry, and timeout policies, and degrades to zeroed placeholders on any
//! failure so a verification run always yields a complete signal map.

mod client;
mod coordinator;
mod error;
mod extract;
mod platforms;
mod rate_limit;
mod retry;

pub use client::SearchClient;
pub use coordinator::{ScrapeConfig, ScrapeCoordinator};
pub use error::ScraperError;
