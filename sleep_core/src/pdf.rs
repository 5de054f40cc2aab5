//! # PDF Report
//!
//! Renders a one-page Smart Sleep Score report with Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Values are injected by placeholder replacement before compilation
//! - Fonts come from `typst-assets`; no files are read at runtime
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use sleep_core::calculations::{calculate_results, CalculatorInputs};
//! use sleep_core::pdf::render_report_pdf;
//!
//! let inputs = CalculatorInputs::default().with_disruptor("hot-sleep");
//! let results = calculate_results(&inputs).unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//!
//! let pdf_bytes = render_report_pdf(&inputs, &results, date).unwrap();
//! std::fs::write("sleep-score-report.pdf", pdf_bytes).unwrap();
//! ```

use chrono::{NaiveDate, Utc};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::{CalculatorInputs, CalculatorResults};
use crate::disruptors::resolve_disruptors;
use crate::errors::{CalcError, CalcResult};
use crate::format::{format_break_even, format_currency, format_percent};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling a single in-memory document.
struct PdfWorld {
    main: Source,
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        typst_assets::fonts()
            .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
            .collect()
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// Report Template
// ============================================================================

const REPORT_TEMPLATE: &str = r##"
#let primary = rgb(79, 70, 229)
#let ink = rgb(60, 60, 60)

#set page(
  paper: "us-letter",
  margin: (top: 0.8in, bottom: 1in, left: 0.8in, right: 0.8in),
  footer: align(center)[
    #text(size: 10pt, fill: rgb(150, 150, 150))[
      Smart Sleep Score Calculator \
      Invest in better sleep, invest in yourself.
    ]
  ]
)

#set text(font: "Libertinus Serif", size: 11pt, fill: ink)

#align(center)[
  #text(size: 24pt, weight: "bold", fill: primary)[Smart Sleep Score Report]
  #v(2pt)
  #text(size: 12pt, fill: rgb(100, 100, 100))[Generated on {{DATE}}]
]

#v(18pt)

#text(size: 48pt, weight: "bold", fill: primary)[{{SCORE}}]
#h(6pt)
#text(size: 24pt, fill: primary)[/100 (Grade {{GRADE}})]

#v(4pt)
{{MESSAGE}}

#v(16pt)

#text(size: 16pt, fill: black)[*Key Metrics*]

#table(
  columns: (auto, 1fr),
  stroke: none,
  inset: (x: 0pt, y: 4pt),
  column-gutter: 24pt,
  [ROI:], text(fill: primary)[{{ROI}}],
  [Break-even:], text(fill: primary)[{{BREAK_EVEN}}],
  [10-Year Value:], text(fill: primary)[{{TEN_YEAR}}],
  [Yearly Savings:], text(fill: primary)[{{SAVINGS}}],
)

#v(16pt)

#text(size: 16pt, fill: black)[*Current Annual Sleep Costs*]

#table(
  columns: (auto, 1fr),
  stroke: none,
  inset: (x: 0pt, y: 4pt),
  column-gutter: 24pt,
  [Sleep Disruptors:], [{{SLEEP_COST}}],
  [Caffeine/Stimulants:], [{{CAFFEINE_COST}}],
  [Productivity Loss ({{PRODUCTIVITY_PERCENT}}):], [{{PRODUCTIVITY_COST}}],
  [Total Cost:], text(fill: black, weight: "bold")[{{TOTAL_COST}}],
)
{{ISSUES}}"##;

// ============================================================================
// Rendering
// ============================================================================

/// Build the Typst source for a report.
pub fn build_report_source(
    inputs: &CalculatorInputs,
    results: &CalculatorResults,
    generated_on: NaiveDate,
) -> String {
    REPORT_TEMPLATE
        .replace("{{DATE}}", &generated_on.format("%B %-d, %Y").to_string())
        .replace("{{SCORE}}", &results.sleep_score.to_string())
        .replace("{{GRADE}}", results.score_grade.letter())
        .replace("{{MESSAGE}}", &escape_typst(&results.score_message))
        .replace("{{ROI}}", &format_percent(results.roi))
        .replace(
            "{{BREAK_EVEN}}",
            &format_break_even(results.break_even_months),
        )
        .replace("{{TEN_YEAR}}", &money(results.ten_year_value))
        .replace("{{SAVINGS}}", &money(results.yearly_savings))
        .replace("{{SLEEP_COST}}", &money(results.annual_sleep_cost))
        .replace("{{CAFFEINE_COST}}", &money(results.annual_caffeine_cost))
        .replace(
            "{{PRODUCTIVITY_PERCENT}}",
            &format_percent(results.productivity_loss_percent),
        )
        .replace("{{PRODUCTIVITY_COST}}", &money(results.annual_productivity_loss))
        .replace("{{TOTAL_COST}}", &money(results.total_annual_cost))
        .replace("{{ISSUES}}", &build_issue_list(inputs))
}

/// Render the report to PDF bytes.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError::ReportFailed)` - If Typst compilation or PDF export fails
pub fn render_report_pdf(
    inputs: &CalculatorInputs,
    results: &CalculatorResults,
    generated_on: NaiveDate,
) -> CalcResult<Vec<u8>> {
    let source = build_report_source(inputs, results, generated_on);
    let pdf_bytes = compile_pdf(source)?;
    tracing::info!(bytes = pdf_bytes.len(), "rendered sleep score report");
    Ok(pdf_bytes)
}

fn compile_pdf(source: String) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);

    for warning in &warned.warnings {
        tracing::debug!(message = %warning.message, "typst warning");
    }

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::report_failed("compile", error_msgs.join("; "))
    })?;

    typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::report_failed("pdf export", error_msgs.join("; "))
    })
}

/// "Selected Sleep Issues" section; empty when nothing known is selected.
fn build_issue_list(inputs: &CalculatorInputs) -> String {
    let disruptors = resolve_disruptors(&inputs.selected_disruptors);
    if disruptors.is_empty() {
        return String::new();
    }

    let items: Vec<String> = disruptors
        .iter()
        .map(|d| format!("- {}: {}/year", escape_typst(d.label), money(d.annual_cost)))
        .collect();

    format!(
        "\n#v(16pt)\n\n#text(size: 16pt, fill: black)[*Selected Sleep Issues*]\n\n#text(size: 10pt)[\n{}\n]\n",
        items.join("\n")
    )
}

/// Currency, escaped for Typst markup
fn money(amount: f64) -> String {
    escape_typst(&format_currency(amount))
}

/// Escape special Typst characters in text placed in markup
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '[' => "\\[".to_string(),
            ']' => "\\]".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate_results;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("$1,200"), "\\$1,200");
        assert_eq!(escape_typst("a_b*c"), "a\\_b\\*c");
        assert_eq!(escape_typst("plain text"), "plain text");
    }

    #[test]
    fn test_source_has_values() {
        let inputs = CalculatorInputs::default().with_disruptor("snoring-apnea");
        let results = calculate_results(&inputs).unwrap();
        let source = build_report_source(&inputs, &results, date());

        assert!(source.contains("Generated on March 9, 2025"));
        assert!(source.contains("[40]"));
        assert!(source.contains("Grade C"));
        assert!(source.contains("[184%]"));
        assert!(source.contains("\\$43,400"));
        assert!(source.contains("- Snoring / Sleep Apnea: \\$3,000/year"));
        assert!(!source.contains("{{"));
    }

    #[test]
    fn test_issue_section_omitted_without_disruptors() {
        let inputs = CalculatorInputs::default().with_disruptor("not-a-thing");
        let results = calculate_results(&inputs).unwrap();
        let source = build_report_source(&inputs, &results, date());
        assert!(!source.contains("Selected Sleep Issues"));
    }

    #[test]
    fn test_pdf_generation() {
        let inputs = CalculatorInputs::default()
            .with_disruptor("general-pain")
            .with_disruptor("allergies");
        let results = calculate_results(&inputs).unwrap();
        let pdf = render_report_pdf(&inputs, &results, date());

        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }
}
