use crate::employee::Payslip;
use crate::error::{PayslipError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const MM_PER_PT: f32 = 0.3528;

/// Renders one fixed-layout, single-page A4 payslip per employee.
///
/// Output path is deterministic: `<output_dir>/<employee_id>.pdf`, overwritten
/// on re-runs. All failures come back as `Record` errors tagged with the
/// employee identity so the batch loop can skip and continue.
pub struct PdfRenderer {
    output_dir: PathBuf,
}

impl PdfRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn render(&self, slip: &Payslip) -> Result<PathBuf> {
        let tag = |reason: String| PayslipError::Record {
            employee: slip.identity(),
            reason,
        };

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| tag(format!("cannot create output directory: {e}")))?;

        let (doc, page, layer) = PdfDocument::new(
            "Monthly Payslip",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| tag(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| tag(e.to_string()))?;

        let title = "Monthly Payslip";
        layer.use_text(title, 16.0, centered_x(title, 16.0), Mm(270.0), &bold);

        // Fixed single-page layout, top to bottom with blank gaps around the
        // salary block and the net line.
        let x = Mm(LEFT_MARGIN_MM);
        let ys = [
            250.0,
            250.0 - LINE_HEIGHT_MM,
            225.0,
            225.0 - LINE_HEIGHT_MM,
            225.0 - 2.0 * LINE_HEIGHT_MM,
        ];
        for (text, y) in detail_lines(slip).into_iter().zip(ys) {
            layer.use_text(text, 12.0, x, Mm(y), &regular);
        }
        layer.use_text(net_line(slip), 12.0, x, Mm(190.0), &bold);

        let path = self.output_dir.join(format!("{}.pdf", slip.employee_id));
        let file = File::create(&path).map_err(|e| tag(format!("cannot write {}: {e}", path.display())))?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| tag(e.to_string()))?;
        Ok(path)
    }
}

/// The left-aligned detail lines, in page order.
fn detail_lines(slip: &Payslip) -> [String; 5] {
    [
        format!("Employee ID: {}", slip.employee_id),
        format!("Name: {}", slip.name),
        format!("Basic Salary: ${}", slip.basic_salary),
        format!("Allowances: ${}", slip.allowances),
        format!("Deductions: ${}", slip.deductions),
    ]
}

/// The bold net line, always with exactly two decimal places.
fn net_line(slip: &Payslip) -> String {
    format!("Net Salary: ${:.2}", slip.net_salary)
}

/// Horizontal position that centers `text` on the page, using the average
/// Helvetica glyph width. Close enough for a one-line title.
fn centered_x(text: &str, font_size_pt: f32) -> Mm {
    let width_mm = text.len() as f32 * font_size_pt * 0.5 * MM_PER_PT;
    Mm(((PAGE_WIDTH_MM - width_mm) / 2.0).max(0.0))
}
