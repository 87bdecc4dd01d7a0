//! PDF report renderer.
//!
//! Builds the report with the builtin Helvetica faces and a simple
//! top-down cursor layout, breaking to a new page when a block would run
//! past the bottom margin.

use leadcheck_core::{AnalysisResult, Verdict};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb,
};

use crate::error::ExportError;
use crate::report::{breakdown_rows, confidence_text, verdict_text, ReportLead, REPORT_TITLE};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 18.0;
const PT_TO_MM: f32 = 0.3528;

const INK: (f32, f32, f32) = (0.066, 0.094, 0.153); // #111827
const MUTED: (f32, f32, f32) = (0.42, 0.447, 0.502); // #6b7280
const GREEN: (f32, f32, f32) = (0.086, 0.639, 0.29); // #16a34a
const RED: (f32, f32, f32) = (0.863, 0.149, 0.149); // #dc2626
const WHITE: (f32, f32, f32) = (1.0, 1.0, 1.0);

struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PageWriter {
    fn new() -> Result<Self, ExportError> {
        let (doc, page, layer) =
            PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    fn ensure_space(&mut self, needed_mm: f32) {
        if self.y - needed_mm < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    fn set_color(&self, rgb: (f32, f32, f32)) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(rgb.0, rgb.1, rgb.2, None)));
    }

    /// Write wrapped text lines at the cursor, advancing it.
    fn text(&mut self, text: &str, size: f32, color: (f32, f32, f32), bold: bool) {
        let line_height = size * 1.35 * PT_TO_MM;
        for line in wrap_words(text, max_chars_for(size)) {
            self.ensure_space(line_height);
            self.y -= line_height;
            self.set_color(color);
            let font = if bold { &self.bold } else { &self.regular };
            self.layer
                .use_text(line, size, Mm(MARGIN_MM), Mm(self.y), font);
        }
    }

    fn heading(&mut self, text: &str) {
        self.gap(3.0);
        self.text(text, 13.0, INK, true);
        self.gap(1.0);
    }

    fn bullet_list(&mut self, items: &[String]) {
        for item in items {
            self.text(&format!("\u{2022} {item}"), 11.0, INK, false);
        }
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    /// Filled banner with centered-left white label, color-coded by verdict.
    fn banner(&mut self, label: &str, fill: (f32, f32, f32)) {
        const BANNER_HEIGHT: f32 = 14.0;
        self.ensure_space(BANNER_HEIGHT + 4.0);
        let top = self.y;
        let bottom = self.y - BANNER_HEIGHT;
        let right = PAGE_WIDTH_MM - MARGIN_MM;

        self.set_color(fill);
        let rect = Polygon {
            rings: vec![vec![
                (Point::new(Mm(MARGIN_MM), Mm(top)), false),
                (Point::new(Mm(right), Mm(top)), false),
                (Point::new(Mm(right), Mm(bottom)), false),
                (Point::new(Mm(MARGIN_MM), Mm(bottom)), false),
            ]],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        };
        self.layer.add_polygon(rect);

        self.set_color(WHITE);
        self.layer.use_text(
            label,
            16.0,
            Mm(MARGIN_MM + 4.0),
            Mm(bottom + 4.5),
            &self.bold,
        );
        self.y = bottom;
        self.gap(4.0);
    }

    fn into_bytes(self) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Vec::new();
        {
            let mut writer = std::io::BufWriter::new(&mut bytes);
            self.doc
                .save(&mut writer)
                .map_err(|e| ExportError::Pdf(e.to_string()))?;
        }
        Ok(bytes)
    }
}

fn max_chars_for(size: f32) -> usize {
    // Helvetica averages roughly half an em per glyph.
    let usable_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let chars = (usable_mm / (size * PT_TO_MM * 0.5)) as usize;
    chars.max(16)
}

fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Render the full verification report as PDF bytes.
///
/// # Errors
///
/// Returns [`ExportError::Pdf`] if document assembly or serialization fails.
pub fn generate_pdf(
    analysis: &AnalysisResult,
    lead: &ReportLead,
    product_url: &str,
) -> Result<Vec<u8>, ExportError> {
    let mut page = PageWriter::new()?;

    page.text(REPORT_TITLE, 20.0, INK, true);
    page.gap(1.0);
    page.text(
        &format!("Generated: {}", analysis.created_at.format("%Y-%m-%d %H:%M:%S UTC")),
        10.0,
        MUTED,
        false,
    );
    page.gap(4.0);

    page.text(&format!("Lead: {}", lead.name), 12.0, INK, false);
    page.text(&format!("Title: {}", lead.title), 12.0, INK, false);
    page.text(&format!("Company: {}", lead.company), 12.0, INK, false);
    page.gap(4.0);

    let fill = match analysis.verdict {
        Verdict::Pitch => GREEN,
        Verdict::DontPitch => RED,
    };
    page.banner(verdict_text(analysis.verdict), fill);

    page.text(
        &format!("Overall Score: {}/100", analysis.overall_score),
        14.0,
        INK,
        true,
    );
    page.text(
        &format!(
            "Confidence: {} ({}%)",
            confidence_text(analysis.confidence),
            analysis.confidence_percent
        ),
        11.0,
        MUTED,
        false,
    );

    page.heading("Score Breakdown");
    for (label, value) in breakdown_rows(analysis) {
        page.text(&format!("{label}: {value}/100"), 11.0, INK, false);
    }

    page.heading("Reasons For Pitching");
    page.bullet_list(&analysis.reasons_for_pitching);

    page.heading("Reasons Against Pitching");
    page.bullet_list(&analysis.reasons_against_pitching);

    page.heading("Company Profile");
    let profile = &analysis.company_profile;
    page.text(&format!("Name: {}", profile.name), 11.0, INK, false);
    page.text(
        &format!("Location/Industry: {}", profile.location),
        11.0,
        INK,
        false,
    );
    let employees = profile
        .estimated_employees
        .map_or_else(|| "Unknown".to_owned(), |n| n.to_string());
    page.text(&format!("Estimated Employees: {employees}"), 11.0, INK, false);
    page.text(
        &format!("Primary Business: {}", profile.primary_business),
        11.0,
        INK,
        false,
    );
    page.gap(1.0);
    page.text("Recent Milestones:", 11.0, INK, false);
    let milestones: Vec<String> = profile.recent_milestones.iter().take(5).cloned().collect();
    page.bullet_list(&milestones);

    page.heading("Recommended Messaging Angles");
    page.bullet_list(&analysis.recommended_messaging);

    page.gap(4.0);
    page.text(&format!("Built by Taggle — {product_url}"), 10.0, MUTED, false);

    page.into_bytes()
}
