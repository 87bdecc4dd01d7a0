use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("DOCX rendering failed: {0}")]
    Docx(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail provider rejected the message with status {status}: {body}")]
    MailRejected { status: u16, body: String },
}
