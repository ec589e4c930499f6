//! Extraction-result export.
//!
//! Projects the comparison matrix into per-question rows and wraps the
//! serialized text in a downloadable artifact (filename + MIME type). Two
//! flavors exist and both produce `.csv` files: plain CSV, and an
//! Excel-friendly variant that prefixes a UTF-8 byte-order mark and
//! declares the charset in its MIME type (spreadsheet applications key
//! their encoding detection off the BOM). Past the three BOM bytes the two
//! outputs are byte-identical.
//!
//! An export over zero rows is refused with `ExportError::NoData`; the
//! caller decides how to surface that. No file is produced.

use std::fmt;
use std::path::{Path, PathBuf};

use lexsift_engine::model::DocumentColumn;
use lexsift_engine::{build, Cell};

use crate::tabular::{to_csv, RowMap};

/// UTF-8 byte-order mark prepended by the Excel flavor.
pub const UTF8_BOM: &str = "\u{feff}";

const FILENAME_SUFFIX: &str = "_extraction_results.csv";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ExportError {
    /// The projected row set is empty; nothing to export.
    NoData,
    /// Artifact materialization failed (file create/write).
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "no data to export"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

// ---------------------------------------------------------------------------
// Artifact
// ---------------------------------------------------------------------------

/// Export flavor. Both are comma-delimited text with a `.csv` extension;
/// Excel is a UTF-8-BOM CSV, not a binary spreadsheet format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
}

impl ExportFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Excel => "text/csv;charset=utf-8",
        }
    }
}

/// A ready-to-materialize download: serialized content plus the metadata
/// the host needs to hand it to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl ExportArtifact {
    /// Write the artifact into `dir` under its own filename. This is the
    /// single fire-and-forget side effect of the export path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, self.content.as_bytes())
            .map_err(|e| ExportError::Io(format!("cannot write {}: {e}", path.display())))?;
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Row projection
// ---------------------------------------------------------------------------

/// Project questions × documents into export rows: one row per question,
/// and per document a Value and Confidence sub-column, plus a Citation
/// sub-column only on rows whose cell actually carries one. The citation
/// column thus appears in the header union iff at least one answer from
/// that document is cited.
pub fn extraction_rows(questions: &[String], documents: &[DocumentColumn]) -> Vec<RowMap> {
    let matrix = build(questions, documents);

    matrix
        .rows
        .iter()
        .map(|matrix_row| {
            let mut row = RowMap::new();
            row.insert("Field/Question", matrix_row.question.as_str());

            for (column, cell) in matrix.columns.iter().zip(&matrix_row.cells) {
                let value_key = format!("{} - Value", column.filename);
                let confidence_key = format!("{} - Confidence", column.filename);

                match cell {
                    Cell::Answered(record) => {
                        row.insert(value_key, record.value.as_str());
                        row.insert(confidence_key, format_confidence(record.confidence));
                        if let Some(citation) = &record.citation {
                            row.insert(format!("{} - Citation", column.filename), citation.as_str());
                        }
                    }
                    Cell::Absent => {
                        row.insert(value_key, "N/A");
                        row.insert(confidence_key, "N/A");
                    }
                }
            }

            row
        })
        .collect()
}

/// Integer percentage with a trailing `%`, rounding half away from zero.
fn format_confidence(confidence: f64) -> String {
    format!("{}%", (confidence * 100.0).round() as i64)
}

/// Every character outside `[A-Za-z0-9]` becomes `_`, one for one.
fn sanitize_project_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Export the comparison matrix as plain CSV.
pub fn export_extraction_results(
    project_name: &str,
    questions: &[String],
    documents: &[DocumentColumn],
) -> Result<ExportArtifact, ExportError> {
    export_as(project_name, questions, documents, ExportFormat::Csv)
}

/// Export the comparison matrix as a UTF-8-BOM CSV for spreadsheet apps.
pub fn export_extraction_results_to_excel(
    project_name: &str,
    questions: &[String],
    documents: &[DocumentColumn],
) -> Result<ExportArtifact, ExportError> {
    export_as(project_name, questions, documents, ExportFormat::Excel)
}

/// Shared driver for both flavors.
pub fn export_as(
    project_name: &str,
    questions: &[String],
    documents: &[DocumentColumn],
    format: ExportFormat,
) -> Result<ExportArtifact, ExportError> {
    let rows = extraction_rows(questions, documents);
    if rows.is_empty() {
        return Err(ExportError::NoData);
    }

    let csv = to_csv(&rows);
    let content = match format {
        ExportFormat::Csv => csv,
        ExportFormat::Excel => format!("{UTF8_BOM}{csv}"),
    };

    Ok(ExportArtifact {
        filename: format!("{}{FILENAME_SUFFIX}", sanitize_project_name(project_name)),
        mime_type: format.mime_type(),
        content,
    })
}
