use axum::{extract::State, Json};
use leadcheck_analysis::analyze_lead;
use leadcheck_core::{AnalysisResult, FieldError, LeadData};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub lead: LeadData,
    #[serde(default)]
    pub consent_scraping: bool,
    #[serde(default)]
    pub consent_deletion: bool,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub analysis_id: Uuid,
    pub expires_at: String,
    pub analysis: AnalysisResult,
}

/// Run the full pipeline for one lead: validate, scrape, score, store.
///
/// Both consents must be literally true and every lead field must pass
/// validation before any scraping starts. Scrape failures never fail the
/// request; they degrade to placeholder platform records.
pub async fn verify_lead(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let mut details = Vec::new();
    if !req.consent_scraping {
        details.push(FieldError {
            field: "consent_scraping",
            message: "Explicit consent to scraping is required",
        });
    }
    if !req.consent_deletion {
        details.push(FieldError {
            field: "consent_deletion",
            message: "Explicit consent to automatic deletion is required",
        });
    }
    if let Err(err) = req.lead.validate() {
        details.extend(err.fields);
    }
    if !details.is_empty() {
        return Err(ApiError::invalid_request(details));
    }

    let lead = req.lead.normalized();
    let signals = state.coordinator.scrape_all(&lead, None).await;
    let analysis = analyze_lead(&lead, &signals);
    let (id, expires_at) = state.store.create(lead, analysis.clone());
    tracing::info!(
        analysis_id = %id,
        verdict = ?analysis.verdict,
        overall_score = analysis.overall_score,
        "verification complete"
    );

    Ok(Json(VerifyResponse {
        analysis_id: id,
        expires_at: expires_at.to_rfc3339(),
        analysis,
    }))
}
