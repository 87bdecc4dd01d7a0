//! DOCX report renderer. Mirrors the PDF content with Word paragraphs
//! and a breakdown table.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use leadcheck_core::{AnalysisResult, Verdict};

use crate::error::ExportError;
use crate::report::{breakdown_rows, confidence_text, verdict_text, ReportLead, REPORT_TITLE};

const INK_HEX: &str = "111827";
const MUTED_HEX: &str = "6b7280";
const GREEN_HEX: &str = "16a34a";
const RED_HEX: &str = "dc2626";

// docx-rs sizes are half-points.
fn line(text: &str, half_points: usize, color: &str, bold: bool) -> Paragraph {
    let mut run = Run::new().add_text(text).size(half_points).color(color);
    if bold {
        run = run.bold();
    }
    Paragraph::new().add_run(run)
}

fn heading(text: &str) -> Paragraph {
    line(text, 28, INK_HEX, true)
}

fn body(text: &str) -> Paragraph {
    line(text, 22, INK_HEX, false)
}

fn bullet(text: &str) -> Paragraph {
    body(&format!("\u{2022} {text}"))
}

fn breakdown_table(analysis: &AnalysisResult) -> Table {
    let mut rows = vec![TableRow::new(vec![
        TableCell::new().add_paragraph(line("Dimension", 22, INK_HEX, true)),
        TableCell::new().add_paragraph(line("Score", 22, INK_HEX, true)),
    ])];
    for (label, value) in breakdown_rows(analysis) {
        rows.push(TableRow::new(vec![
            TableCell::new().add_paragraph(body(label)),
            TableCell::new().add_paragraph(body(&format!("{value}/100"))),
        ]));
    }
    Table::new(rows)
}

/// Render the full verification report as DOCX bytes.
///
/// # Errors
///
/// Returns [`ExportError::Docx`] if packing the archive fails.
pub fn generate_docx(
    analysis: &AnalysisResult,
    lead: &ReportLead,
    product_url: &str,
) -> Result<Vec<u8>, ExportError> {
    let verdict_hex = match analysis.verdict {
        Verdict::Pitch => GREEN_HEX,
        Verdict::DontPitch => RED_HEX,
    };

    let mut doc = Docx::new()
        .add_paragraph(line(REPORT_TITLE, 40, INK_HEX, true))
        .add_paragraph(line(
            &format!(
                "Generated: {}",
                analysis.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            20,
            MUTED_HEX,
            false,
        ))
        .add_paragraph(body(&format!("Lead: {}", lead.name)))
        .add_paragraph(body(&format!("Title: {}", lead.title)))
        .add_paragraph(body(&format!("Company: {}", lead.company)))
        .add_paragraph(line(verdict_text(analysis.verdict), 32, verdict_hex, true))
        .add_paragraph(line(
            &format!("Overall Score: {}/100", analysis.overall_score),
            26,
            INK_HEX,
            true,
        ))
        .add_paragraph(line(
            &format!(
                "Confidence: {} ({}%)",
                confidence_text(analysis.confidence),
                analysis.confidence_percent
            ),
            22,
            MUTED_HEX,
            false,
        ))
        .add_paragraph(heading("Score Breakdown"))
        .add_table(breakdown_table(analysis))
        .add_paragraph(heading("Reasons For Pitching"));

    for reason in &analysis.reasons_for_pitching {
        doc = doc.add_paragraph(bullet(reason));
    }
    doc = doc.add_paragraph(heading("Reasons Against Pitching"));
    for reason in &analysis.reasons_against_pitching {
        doc = doc.add_paragraph(bullet(reason));
    }

    let profile = &analysis.company_profile;
    let employees = profile
        .estimated_employees
        .map_or_else(|| "Unknown".to_owned(), |n| n.to_string());
    doc = doc
        .add_paragraph(heading("Company Profile"))
        .add_paragraph(body(&format!("Name: {}", profile.name)))
        .add_paragraph(body(&format!("Location/Industry: {}", profile.location)))
        .add_paragraph(body(&format!("Estimated Employees: {employees}")))
        .add_paragraph(body(&format!(
            "Primary Business: {}",
            profile.primary_business
        )))
        .add_paragraph(body("Recent Milestones:"));
    for milestone in profile.recent_milestones.iter().take(5) {
        doc = doc.add_paragraph(bullet(milestone));
    }

    doc = doc.add_paragraph(heading("Recommended Messaging Angles"));
    for angle in &analysis.recommended_messaging {
        doc = doc.add_paragraph(bullet(angle));
    }

    doc = doc.add_paragraph(line(
        &format!("Built by Taggle — {product_url}"),
        20,
        MUTED_HEX,
        false,
    ));

    let mut cursor = Cursor::new(Vec::new());
    doc.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::Docx(e.to_string()))?;
    Ok(cursor.into_inner())
}
