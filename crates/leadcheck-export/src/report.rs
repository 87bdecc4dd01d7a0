//! Shared report layout pieces used by both renderers.

use leadcheck_core::{AnalysisResult, Confidence, Verdict};

/// The minimal lead identity a report needs.
#[derive(Debug, Clone)]
pub struct ReportLead {
    pub name: String,
    pub title: String,
    pub company: String,
}

pub(crate) const REPORT_TITLE: &str = "Taggle — Lead Verification Report";

pub(crate) fn verdict_text(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pitch => "Pitch This Lead",
        Verdict::DontPitch => "Not Ready to Pitch",
    }
}

pub(crate) fn confidence_text(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::Low => "Low",
        Confidence::Medium => "Medium",
        Confidence::High => "High",
    }
}

/// The five-row breakdown table shared by both renderers.
pub(crate) fn breakdown_rows(analysis: &AnalysisResult) -> [(&'static str, u32); 5] {
    [
        ("Company Growth", analysis.breakdown.company_growth),
        ("Recent Social Activity", analysis.breakdown.social_activity),
        ("Job Title / Seniority", analysis.breakdown.job_title),
        ("Hiring Intent", analysis.breakdown.hiring_intent),
        ("Industry / Market Fit", analysis.breakdown.market_fit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_banner_text() {
        assert_eq!(verdict_text(Verdict::Pitch), "Pitch This Lead");
        assert_eq!(verdict_text(Verdict::DontPitch), "Not Ready to Pitch");
    }
}
