use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::Response,
};
use leadcheck_export::{generate_docx, generate_pdf, ReportLead};
use leadcheck_store::StoredAnalysis;
use uuid::Uuid;

use super::{ApiError, AppState};

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub async fn export_pdf(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let item = stored(&state, &id)?;
    let bytes = generate_pdf(&item.analysis, &report_lead(&item), &state.product_url)
        .map_err(|e| {
            tracing::error!(error = %e, analysis_id = %item.id, "pdf export failed");
            ApiError::internal("Export failed")
        })?;
    attachment(bytes, "application/pdf", &format!("lead-verification-{}.pdf", item.id))
}

pub async fn export_docx(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let item = stored(&state, &id)?;
    let bytes = generate_docx(&item.analysis, &report_lead(&item), &state.product_url)
        .map_err(|e| {
            tracing::error!(error = %e, analysis_id = %item.id, "docx export failed");
            ApiError::internal("Export failed")
        })?;
    attachment(
        bytes,
        DOCX_CONTENT_TYPE,
        &format!("lead-verification-{}.docx", item.id),
    )
}

fn stored(state: &AppState, id: &str) -> Result<StoredAnalysis, ApiError> {
    let id = Uuid::parse_str(id).map_err(|_| ApiError::not_found())?;
    state.store.get(id).ok_or_else(ApiError::not_found)
}

fn report_lead(item: &StoredAnalysis) -> ReportLead {
    ReportLead {
        name: item.lead.name.clone(),
        title: item.lead.title.clone(),
        company: item.lead.company.clone(),
    }
}

/// Download response: attachment disposition, never cached.
fn attachment(bytes: Vec<u8>, content_type: &str, filename: &str) -> Result<Response, ApiError> {
    Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from(bytes))
        .map_err(|e| {
            tracing::error!(error = %e, "failed to build export response");
            ApiError::internal("Export failed")
        })
}
