//! Sub-score formulas, verdict threshold, confidence estimation, and
//! narrative generation.
//!
//! The additive keyword weights can exceed 100 before the final clamp; any
//! two strong matches saturate a category. That shape is kept as designed —
//! the scorer treats "multiple independent cues" as a maxed-out category.

use chrono::Utc;
use leadcheck_core::{
    AnalysisResult, CompanyProfile, Confidence, LeadData, PlatformSignals, ScoreBreakdown,
    SignalMap, Verdict,
};
use regex::Regex;

const PITCH_THRESHOLD: u32 = 65;

const FALLBACK_REASONS_FOR: [&str; 3] = [
    "Some positive indicators exist, but public signals are limited — use a light-touch, value-led opener.",
    "Public footprint is thin; treat any outreach as exploratory rather than evidence-driven.",
    "Signals neither confirm nor rule out fit; a short discovery question is the safest opener.",
];

const FALLBACK_REASONS_AGAINST: [&str; 3] = [
    "Limited public data available across platforms in the selected window; confidence is reduced.",
    "Few platforms returned usable signals, so the verdict rests on a narrow evidence base.",
    "Public activity could not be validated in the selected window.",
];

fn matches(pattern: &str, text: &str) -> bool {
    Regex::new(pattern).expect("valid scoring regex").is_match(text)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_score(n: f64) -> u32 {
    n.round().clamp(0.0, 100.0) as u32
}

/// Deduplicate trimmed, non-empty strings preserving insertion order, then
/// truncate to `n`.
fn pick_top(items: impl IntoIterator<Item = String>, n: usize) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for item in items {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !unique.iter().any(|u| u == trimmed) {
            unique.push(trimmed.to_owned());
        }
    }
    unique.truncate(n);
    unique
}

/// Pad a deduplicated reasons list to at least 3 entries with distinct
/// generic fallbacks, capped at 5.
fn pad_reasons(mut reasons: Vec<String>, fallbacks: &[&str; 3]) -> Vec<String> {
    for fallback in fallbacks {
        if reasons.len() >= 3 {
            break;
        }
        if !reasons.iter().any(|r| r == fallback) {
            reasons.push((*fallback).to_owned());
        }
    }
    reasons.truncate(5);
    reasons
}

fn score_job_title(title_raw: &str) -> u32 {
    let title = title_raw.to_lowercase();

    let c_suite = ["ceo", "cto", "cfo", "coo", "cmo", "chief"];
    let vp_director = ["vp", "vice president", "director", "head of"];
    let manager_lead = ["manager", "lead", "team lead", "engineering lead", "product lead"];

    if c_suite.iter().any(|t| title.contains(t)) {
        return 100;
    }
    if vp_director.iter().any(|t| title.contains(t)) {
        return 75;
    }
    if manager_lead.iter().any(|t| title.contains(t)) {
        return 50;
    }
    if title.trim().is_empty() {
        return 40;
    }
    25
}

fn score_company_growth(signals: &[&PlatformSignals]) -> u32 {
    let text = signals
        .iter()
        .flat_map(|s| s.growth_signals.iter().chain(s.data_points.iter()))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ")
        .to_lowercase();

    let mut score = 0u32;
    if matches(r"(funding|series [a-f]|seed round|raised \$|venture)", &text) {
        score += 60;
    }
    if matches(r"(launch|released|new product|beta|general availability|ga)", &text) {
        score += 48;
    }
    if matches(r"(hiring|we're hiring|join us|open roles|team is growing|expanding)", &text) {
        score += 72;
    }
    if matches(r"(revenue|arr|grew|growth|record quarter)", &text) {
        score += 60;
    }
    if matches(r"(partnership|partnered with|collaboration|integration)", &text) {
        score += 40;
    }

    score.min(100)
}

fn score_recent_social_activity(signals: &[&PlatformSignals], lead: &LeadData) -> u32 {
    #[allow(clippy::cast_precision_loss)]
    let days = lead.history_window.days() as f64;

    let recent_posts: u32 = signals.iter().map(|s| s.recent_posts_count).sum();
    #[allow(clippy::cast_precision_loss)]
    let avg_engagement = if signals.is_empty() {
        0.0
    } else {
        signals.iter().map(|s| f64::from(s.engagement_score)).sum::<f64>() / signals.len() as f64
    };

    // ~20 points per "month" of posting activity within the window.
    let posts_score = clamp_score(f64::from(recent_posts) / (days / 30.0).max(1.0) * 20.0);
    let engagement_score = clamp_score(avg_engagement);

    // Follower growth is usually not directly observable; posting activity
    // stands in as a proxy.
    let follower_growth_proxy = clamp_score(f64::from(posts_score) * 0.75);

    clamp_score(
        f64::from(posts_score) * 0.4
            + f64::from(engagement_score) * 0.4
            + f64::from(follower_growth_proxy) * 0.2,
    )
}

fn score_hiring_intent(signals: &[&PlatformSignals]) -> u32 {
    let hiring_mentions = signals
        .iter()
        .flat_map(|s| s.hiring_signals.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ")
        .to_lowercase();
    let points = signals
        .iter()
        .flat_map(|s| s.hiring_signals.iter().chain(s.data_points.iter()))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ")
        .to_lowercase();

    let mut score = 0u32;
    if matches(r"(we're hiring|we are hiring|hiring)", &hiring_mentions) {
        score += 90;
    }
    if matches(r"(join us)", &hiring_mentions) {
        score += 75;
    }
    if matches(r"(careers|open roles|job openings|apply now)", &points) {
        score += 60;
    }
    if matches(r"(multiple roles|several roles|many openings)", &points) {
        score += 75;
    }
    if matches(
        r"(lever\.co|greenhouse\.io|workable\.com|ashbyhq\.com|smartrecruiters\.com)",
        &points,
    ) {
        score += 50;
    }

    score.min(100)
}

fn score_market_fit(signals: &[&PlatformSignals], lead: &LeadData) -> u32 {
    let evidence = signals
        .iter()
        .flat_map(|s| {
            s.growth_signals
                .iter()
                .chain(s.hiring_signals.iter())
                .chain(s.data_points.iter())
        })
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let haystack = format!("{} {evidence}", lead.location).to_lowercase();

    let mut score = 0u32;
    if matches(r"(cloud|aws|gcp|azure|kubernetes|devops)", &haystack) {
        score += 60;
    }
    if matches(r"(ai|ml|machine learning|automation|agents)", &haystack) {
        score += 60;
    }
    if matches(r"(expanding|international|new market|market expansion)", &haystack) {
        score += 40;
    }
    if matches(r"(r&d|research|innovation|new initiative)", &haystack) {
        score += 50;
    }
    if matches(r"(saas|platform|api|b2b)", &haystack) {
        score += 35;
    }

    score.min(100)
}

fn calculate_confidence(signal_map: &SignalMap) -> (Confidence, u32) {
    let with_data: Vec<&PlatformSignals> =
        signal_map.values().filter(|s| s.has_data()).collect();

    let platform_count = with_data.len();
    let spread = if platform_count <= 1 {
        100
    } else {
        let max = with_data.iter().map(|s| s.activity_score).max().unwrap_or(0);
        let min = with_data.iter().map(|s| s.activity_score).min().unwrap_or(0);
        max - min
    };

    if platform_count >= 4 && spread < 15 {
        return (Confidence::High, 85);
    }
    if (2..=3).contains(&platform_count) && (15..=30).contains(&spread) {
        return (Confidence::Medium, 65);
    }
    if platform_count >= 2 {
        return (Confidence::Medium, 55);
    }
    (Confidence::Low, 35)
}

/// Score a lead against its scraped signal map.
///
/// Pure aside from the embedded `created_at` timestamp; identical inputs
/// yield identical scores, verdict, confidence, and narratives.
#[must_use]
pub fn analyze_lead(lead: &LeadData, signal_map: &SignalMap) -> AnalysisResult {
    let signals: Vec<&PlatformSignals> = signal_map.values().collect();

    let company_growth = score_company_growth(&signals);
    let social = score_recent_social_activity(&signals, lead);
    let title = score_job_title(&lead.title);
    let hiring = score_hiring_intent(&signals);
    let fit = score_market_fit(&signals, lead);

    let weighted = f64::from(company_growth) * 0.25
        + f64::from(social) * 0.2
        + f64::from(title) * 0.2
        + f64::from(hiring) * 0.2
        + f64::from(fit) * 0.15;

    let overall = clamp_score(weighted);
    let verdict = if overall >= PITCH_THRESHOLD {
        Verdict::Pitch
    } else {
        Verdict::DontPitch
    };

    let (confidence, confidence_percent) = calculate_confidence(signal_map);

    tracing::debug!(
        overall,
        company_growth,
        social,
        title,
        hiring,
        fit,
        ?verdict,
        "scored lead"
    );

    let mut for_pitch: Vec<String> = Vec::new();
    let mut against: Vec<String> = Vec::new();

    if company_growth >= 60 {
        for_pitch.push(
            "Strong company growth signals detected (funding, launches, partnerships, or expansion)."
                .to_owned(),
        );
    }
    if hiring >= 60 {
        for_pitch.push(
            "Hiring intent indicators found (hiring language, careers pages, or job board activity)."
                .to_owned(),
        );
    }
    if social >= 60 {
        for_pitch
            .push("Active recent social presence with meaningful engagement signals.".to_owned());
    }
    if title >= 75 {
        for_pitch.push("Seniority suggests buying influence (VP/Director/C-suite).".to_owned());
    }
    if fit >= 55 {
        for_pitch.push(
            "Market/tech-fit signals found (cloud, AI, automation, SaaS, innovation).".to_owned(),
        );
    }

    if company_growth < 40 {
        against.push(
            "Limited publicly visible growth signals (funding/launch/partnership cues were weak or missing)."
                .to_owned(),
        );
    }
    if hiring < 40 {
        against.push("Hiring intent not clearly visible in the selected time window.".to_owned());
    }
    if social < 35 {
        against.push(
            "Low recent social activity; may be inactive or hard to validate publicly.".to_owned(),
        );
    }
    if title <= 25 {
        against
            .push("Title suggests limited purchasing authority (or ambiguous seniority).".to_owned());
    }
    if fit < 35 {
        against.push("Insufficient market/tech-fit evidence from public signals.".to_owned());
    }

    let milestones = pick_top(
        signals
            .iter()
            .flat_map(|s| s.growth_signals.iter().cloned())
            .chain(signals.iter().flat_map(|s| s.hiring_signals.iter().cloned())),
        5,
    );

    let funding_momentum = milestones
        .iter()
        .any(|m| matches(r"(?i)(funding|raised|series)", m));
    let hiring_momentum = milestones
        .iter()
        .any(|m| matches(r"(?i)(hiring|join)", m));

    let mut messaging_candidates: Vec<String> = Vec::new();
    if funding_momentum {
        messaging_candidates.push(format!(
            "Congrats on the recent momentum — curious how you're prioritizing initiatives after the funding/news at {}?",
            lead.company
        ));
    }
    if hiring_momentum {
        messaging_candidates.push(format!(
            "Noticed the team is growing — where are the biggest process bottlenecks as you scale hiring at {}?",
            lead.company
        ));
    }
    messaging_candidates.push(format!(
        "Quick question: what does success look like for your team this quarter at {} (especially around {})?",
        lead.company, lead.location
    ));
    let recommended_messaging = pick_top(messaging_candidates, 3);

    let reasons_for_pitching = pad_reasons(pick_top(for_pitch, 5), &FALLBACK_REASONS_FOR);
    let reasons_against_pitching = pad_reasons(pick_top(against, 5), &FALLBACK_REASONS_AGAINST);

    let industry = lead.location.clone();
    let primary_business = format!(
        "Public signals suggest {} is active in {industry}.",
        lead.company
    );

    AnalysisResult {
        verdict,
        overall_score: overall,
        confidence,
        confidence_percent,
        reasons_for_pitching,
        reasons_against_pitching,
        company_profile: CompanyProfile {
            name: lead.company.clone(),
            location: lead.location.clone(),
            industry,
            estimated_employees: None,
            recent_milestones: if milestones.is_empty() {
                vec!["No specific milestones detected in the selected window.".to_owned()]
            } else {
                milestones
            },
            primary_business,
        },
        recommended_messaging,
        scraped_signals: signal_map.clone(),
        breakdown: ScoreBreakdown {
            company_growth,
            social_activity: social,
            job_title: title,
            hiring_intent: hiring,
            market_fit: fit,
        },
        created_at: Utc::now(),
    }
}
