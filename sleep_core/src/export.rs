//! # Export
//!
//! Writes reports and result snapshots to disk. Writes are atomic: the bytes
//! go to a `.tmp` sibling first, are synced, then renamed over the target, so
//! an interrupted export never leaves a half-written PDF behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use sleep_core::calculations::{calculate_results, CalculatorInputs};
//! use sleep_core::export::export_report_pdf;
//!
//! let inputs = CalculatorInputs::default();
//! let results = calculate_results(&inputs)?;
//! export_report_pdf(&inputs, &results, Path::new("report.pdf"))?;
//! # Ok::<(), sleep_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::calculations::{CalculatorInputs, CalculatorResults};
use crate::errors::{CalcError, CalcResult};
use crate::pdf::render_report_pdf;

/// Default report filename for a given day, e.g. `sleep-score-report-2025-03-09.pdf`.
pub fn default_report_filename(date: NaiveDate) -> String {
    format!("sleep-score-report-{}.pdf", date.format("%Y-%m-%d"))
}

/// Write bytes to `path` with atomic write semantics.
///
/// 1. Write to a temporary file (`<name>.tmp`)
/// 2. Sync to disk
/// 3. Rename over the target
///
/// If any step after creating the temporary file fails, it is removed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    if let Err(e) = finish_atomic_write(tmp_file, &tmp_path, path, bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

/// Takes the file by value so it is closed before any cleanup.
fn finish_atomic_write(
    mut tmp_file: File,
    tmp_path: &Path,
    path: &Path,
    bytes: &[u8],
) -> CalcResult<()> {
    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(tmp_path, path).map_err(|e| {
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })
}

/// Render the PDF report dated today and write it to `path`.
pub fn export_report_pdf(
    inputs: &CalculatorInputs,
    results: &CalculatorResults,
    path: &Path,
) -> CalcResult<()> {
    let today = Local::now().date_naive();
    let pdf = render_report_pdf(inputs, results, today)?;
    write_atomic(path, &pdf)
}

/// Write inputs and results side by side as pretty JSON.
pub fn export_results_json(
    inputs: &CalculatorInputs,
    results: &CalculatorResults,
    path: &Path,
) -> CalcResult<()> {
    let snapshot = ResultsSnapshot { inputs, results };
    let json = serde_json::to_string_pretty(&snapshot)?;
    write_atomic(path, json.as_bytes())
}

#[derive(Serialize)]
struct ResultsSnapshot<'a> {
    inputs: &'a CalculatorInputs,
    results: &'a CalculatorResults,
}

/// `report.pdf` -> `report.pdf.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
