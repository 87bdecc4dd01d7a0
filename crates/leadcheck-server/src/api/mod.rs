mod analysis;
mod email;
mod export;
mod verify;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use leadcheck_core::FieldError;
use leadcheck_export::ReportMailer;
use leadcheck_scraper::ScrapeCoordinator;
use leadcheck_store::AnalysisStore;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub store: AnalysisStore,
    pub coordinator: Arc<ScrapeCoordinator>,
    pub mailer: ReportMailer,
    pub product_url: String,
}

/// An error response with the exact wire shape clients expect.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: serde_json::Value,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: json!({ "error": "Not found" }),
        }
    }

    pub fn analysis_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: json!({ "error": "Analysis not found" }),
        }
    }

    pub fn invalid_request(details: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": "Invalid request", "details": details }),
        }
    }

    pub fn internal(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "error": message }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/verify", post(verify::verify_lead))
        .route(
            "/api/analysis/{id}",
            get(analysis::get_analysis).delete(analysis::delete_analysis),
        )
        .route("/api/export/pdf/{id}", get(export::export_pdf))
        .route("/api/export/docx/{id}", get(export::export_docx))
        .route("/api/send-email", post(email::send_email))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
