use axum::{extract::State, Json};
use leadcheck_core::{is_well_formed_email, FieldError};
use leadcheck_export::{generate_pdf, EmailOutcome, ReportLead};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::{ApiError, AppState};

const DEMO_MESSAGE: &str = "Demo Mode: Report would be sent to your email. \
     Configure SendGrid in environment variables for real email delivery.";

#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub analysis_id: String,
    pub email_address: String,
    #[serde(default)]
    pub recipient_name: Option<String>,
}

/// Email the rendered PDF report to the given address.
///
/// Without a provider key the endpoint acknowledges in demo mode without
/// touching the store, so the demo response is identical whether or not the
/// analysis exists.
pub async fn send_email(
    State(state): State<AppState>,
    Json(req): Json<SendEmailRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut details = Vec::new();
    if req.analysis_id.trim().is_empty() {
        details.push(FieldError {
            field: "analysis_id",
            message: "Analysis id is required",
        });
    }
    if !is_well_formed_email(&req.email_address) {
        details.push(FieldError {
            field: "email_address",
            message: "Valid email is required",
        });
    }
    if !details.is_empty() {
        return Err(ApiError::invalid_request(details));
    }

    if !state.mailer.is_configured() {
        tracing::info!("email delivery in demo mode, skipping provider call");
        let outcome = EmailOutcome::demo();
        return Ok(Json(json!({
            "success": true,
            "message": DEMO_MESSAGE,
            "token": outcome.token,
            "demo_mode": true,
        })));
    }

    let id = Uuid::parse_str(&req.analysis_id).map_err(|_| ApiError::analysis_not_found())?;
    let item = state
        .store
        .get(id)
        .ok_or_else(ApiError::analysis_not_found)?;

    let lead = ReportLead {
        name: item.lead.name.clone(),
        title: item.lead.title.clone(),
        company: item.lead.company.clone(),
    };
    let pdf = generate_pdf(&item.analysis, &lead, &state.product_url).map_err(|e| {
        tracing::error!(error = %e, analysis_id = %id, "report render failed before send");
        ApiError::internal("Export failed")
    })?;

    let outcome = state
        .mailer
        .send_report(
            &req.email_address,
            req.recipient_name.as_deref(),
            &item.lead.company,
            id,
            &pdf,
        )
        .await
        .map_err(|e| {
            tracing::error!(error = %e, analysis_id = %id, "email delivery failed");
            ApiError::internal("Email delivery failed")
        })?;

    Ok(Json(json!({
        "success": true,
        "message": "Email sent",
        "token": outcome.token,
    })))
}
