//! Analysis output types: verdict, scores, narratives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::signals::SignalMap;

/// Binary pitch/no-pitch recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pitch,
    DontPitch,
}

/// Meta-estimate of how much the available signal volume/consistency
/// supports the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// The five named sub-scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub company_growth: u32,
    pub social_activity: u32,
    pub job_title: u32,
    pub hiring_intent: u32,
    pub market_fit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub location: String,
    pub industry: String,
    pub estimated_employees: Option<u32>,
    /// Up to 5 deduplicated milestone strings.
    pub recent_milestones: Vec<String>,
    pub primary_business: String,
}

/// The finished analysis for one verification request.
///
/// Owned by the store after creation; the pipeline holds no reference once
/// it is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub overall_score: u32,
    pub confidence: Confidence,
    pub confidence_percent: u32,
    /// 3 to 5 deduplicated strings.
    pub reasons_for_pitching: Vec<String>,
    /// 3 to 5 deduplicated strings.
    pub reasons_against_pitching: Vec<String>,
    pub company_profile: CompanyProfile,
    /// Up to 3 suggested opener angles.
    pub recommended_messaging: Vec<String>,
    pub scraped_signals: SignalMap,
    pub breakdown: ScoreBreakdown,
    pub created_at: DateTime<Utc>,
}
