//! Normalized per-platform signal records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::Confidence;

/// The fixed set of platforms a verification run attempts, in dispatch order.
pub const PLATFORMS: [&str; 5] = ["x", "reddit", "instagram", "linkedin", "facebook"];

/// Normalized evidence extracted from one public source about a lead/company.
///
/// One record per platform per run; never merged across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSignals {
    pub platform: String,
    /// Activity level in `[0, 100]`.
    pub activity_score: u32,
    pub hiring_signals: Vec<String>,
    pub growth_signals: Vec<String>,
    /// Engagement level in `[0, 100]`.
    pub engagement_score: u32,
    pub recent_posts_count: u32,
    pub confidence: Confidence,
    /// Short human-readable evidence strings.
    pub data_points: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Signals keyed by platform name. After a completed run the key set is
/// exactly [`PLATFORMS`], with zeroed placeholders for failed platforms.
pub type SignalMap = BTreeMap<String, PlatformSignals>;

impl PlatformSignals {
    /// Zero-valued placeholder substituted when a platform fails entirely.
    #[must_use]
    pub fn empty(platform: &str) -> Self {
        Self {
            platform: platform.to_owned(),
            activity_score: 0,
            hiring_signals: Vec::new(),
            growth_signals: Vec::new(),
            engagement_score: 0,
            recent_posts_count: 0,
            confidence: Confidence::Low,
            data_points: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Whether this platform contributed any usable data to the run.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.recent_posts_count > 0 || !self.data_points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_signals_are_zeroed() {
        let s = PlatformSignals::empty("x");
        assert_eq!(s.platform, "x");
        assert_eq!(s.activity_score, 0);
        assert_eq!(s.engagement_score, 0);
        assert_eq!(s.recent_posts_count, 0);
        assert_eq!(s.confidence, Confidence::Low);
        assert!(s.hiring_signals.is_empty());
        assert!(s.growth_signals.is_empty());
        assert!(s.data_points.is_empty());
        assert!(!s.has_data());
    }

    #[test]
    fn data_points_alone_count_as_data() {
        let mut s = PlatformSignals::empty("reddit");
        s.data_points.push("r/startups: launch post".to_owned());
        assert!(s.has_data());
    }
}
