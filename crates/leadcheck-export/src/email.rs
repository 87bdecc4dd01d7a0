//! Report delivery over the SendGrid v3 REST API.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::ExportError;

const SENDGRID_BASE_URL: &str = "https://api.sendgrid.com";

/// Result of an email request: either actually sent, or acknowledged in
/// demo mode because no provider key is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailOutcome {
    pub token: String,
    pub demo_mode: bool,
}

impl EmailOutcome {
    /// The acknowledgement handed out when no API key is configured.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            token: format!("demo-{}", Utc::now().timestamp_millis()),
            demo_mode: true,
        }
    }
}

/// Sends finished reports as PDF attachments.
#[derive(Debug, Clone)]
pub struct ReportMailer {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    from_email: String,
}

impl ReportMailer {
    #[must_use]
    pub fn new(api_key: Option<String>, from_email: String) -> Self {
        Self::with_base_url(api_key, from_email, SENDGRID_BASE_URL.to_owned())
    }

    /// Point the mailer at a different API host. Used by tests.
    #[must_use]
    pub fn with_base_url(
        api_key: Option<String>,
        from_email: String,
        base_url: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
            from_email,
        }
    }

    /// Whether a provider key is available. When this is `false`, callers
    /// should hand out [`EmailOutcome::demo`] without touching the report.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send the report PDF to `recipient_email`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Http`] on transport failure and
    /// [`ExportError::MailRejected`] when the provider answers with a
    /// non-success status.
    pub async fn send_report(
        &self,
        recipient_email: &str,
        recipient_name: Option<&str>,
        company: &str,
        analysis_id: Uuid,
        pdf_bytes: &[u8],
    ) -> Result<EmailOutcome, ExportError> {
        let Some(api_key) = &self.api_key else {
            return Ok(EmailOutcome::demo());
        };

        let token = Uuid::new_v4().to_string();
        let greeting_name = recipient_name.filter(|n| !n.trim().is_empty()).unwrap_or("there");
        let html = format!(
            "<p>Hi {greeting_name},</p>\
             <p>Your lead verification report for <strong>{company}</strong> is attached.</p>\
             <p>— Taggle</p>"
        );
        let payload = json!({
            "personalizations": [{ "to": [{ "email": recipient_email }] }],
            "from": { "email": self.from_email },
            "subject": format!("Lead Verification Report — {company}"),
            "content": [{ "type": "text/html", "value": html }],
            "attachments": [{
                "content": BASE64.encode(pdf_bytes),
                "type": "application/pdf",
                "filename": format!("lead-verification-{analysis_id}.pdf"),
                "disposition": "attachment",
            }],
            "headers": { "X-Tracking-Token": token },
        });

        let response = self
            .http
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "mail provider rejected report email");
            return Err(ExportError::MailRejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(%analysis_id, "report email accepted by provider");
        Ok(EmailOutcome {
            token,
            demo_mode: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn mailer(server: &MockServer, api_key: Option<&str>) -> ReportMailer {
        ReportMailer::with_base_url(
            api_key.map(str::to_owned),
            "reports@taggle.ai".to_owned(),
            server.uri(),
        )
    }

    #[tokio::test]
    async fn sends_pdf_attachment_with_bearer_auth() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();
        Mock::given(method("POST"))
            .and(path("/v3/mail/send"))
            .and(header("authorization", "Bearer sg-key"))
            .and(body_partial_json(json!({
                "personalizations": [{ "to": [{ "email": "buyer@acme.test" }] }],
                "from": { "email": "reports@taggle.ai" },
                "subject": "Lead Verification Report — Acme",
                "attachments": [{
                    "content": BASE64.encode(b"%PDF-fake"),
                    "type": "application/pdf",
                    "filename": format!("lead-verification-{id}.pdf"),
                }],
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = mailer(&server, Some("sg-key"))
            .send_report("buyer@acme.test", Some("Pat"), "Acme", id, b"%PDF-fake")
            .await
            .unwrap();
        assert!(!outcome.demo_mode);
        assert!(Uuid::parse_str(&outcome.token).is_ok());
    }

    #[tokio::test]
    async fn missing_api_key_short_circuits_to_demo_outcome() {
        let server = MockServer::start().await;
        // No mock mounted: any request would 404 and fail the assertions below.
        let outcome = mailer(&server, None)
            .send_report("buyer@acme.test", None, "Acme", Uuid::new_v4(), b"%PDF-fake")
            .await
            .unwrap();
        assert!(outcome.demo_mode);
        assert!(outcome.token.starts_with("demo-"));
        assert_eq!(server.received_requests().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn provider_rejection_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/mail/send"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let err = mailer(&server, Some("sg-key"))
            .send_report("buyer@acme.test", None, "Acme", Uuid::new_v4(), b"%PDF-fake")
            .await
            .unwrap_err();
        match err {
            ExportError::MailRejected { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn blank_recipient_name_falls_back_to_generic_greeting() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/mail/send"))
            .and(body_partial_json(json!({
                "content": [{ "type": "text/html" }],
            })))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        mailer(&server, Some("sg-key"))
            .send_report("buyer@acme.test", Some("  "), "Acme", Uuid::new_v4(), b"x")
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let html = body["content"][0]["value"].as_str().unwrap();
        assert!(html.contains("Hi there,"));
    }
}
