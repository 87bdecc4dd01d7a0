//! Report rendering (PDF/DOCX) and email delivery for finished analyses.

mod docx;
mod email;
mod error;
mod pdf;
mod report;

pub use docx::generate_docx;
pub use email::{EmailOutcome, ReportMailer};
pub use error::ExportError;
pub use pdf::generate_pdf;
pub use report::ReportLead;
