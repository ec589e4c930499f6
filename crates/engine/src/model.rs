use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One extracted answer: what the backend produced for a single question
/// against a single document. Immutable once received.
///
/// The question text itself is the join key: the extraction service does
/// not assign surrogate IDs that survive re-generation, so the matrix
/// builder matches on `question` with exact string equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Wire name is `question_text` (provider contract).
    #[serde(rename = "question_text")]
    pub question: String,
    pub value: String,
    /// Extraction confidence in [0, 1].
    pub confidence: f64,
    /// Supporting snippet from the source document, when the model cited one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

/// One column of the comparison matrix: a source document and whatever
/// answers were extracted from it. `answers` need not cover every question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentColumn {
    pub id: String,
    pub filename: String,
    pub answers: Vec<AnswerRecord>,
}

// ---------------------------------------------------------------------------
// Matrix
// ---------------------------------------------------------------------------

/// A resolved matrix cell. Absence is an explicit state, never an empty
/// string, so consumers must decide how to render it ("N/A" in exports,
/// an em-dash in views).
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Answered(AnswerRecord),
    Absent,
}

impl Cell {
    pub fn is_absent(&self) -> bool {
        matches!(self, Cell::Absent)
    }

    /// The answer record, if any.
    pub fn answer(&self) -> Option<&AnswerRecord> {
        match self {
            Cell::Answered(record) => Some(record),
            Cell::Absent => None,
        }
    }
}

/// Column identity carried alongside the resolved rows, in document
/// arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMeta {
    pub id: String,
    pub filename: String,
}

/// One matrix row: a question and its resolved cell per document column.
/// `cells.len() == columns.len()` always.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    pub question: String,
    pub cells: Vec<Cell>,
}

/// The question × document comparison matrix. Derived data: rebuilt from
/// scratch whenever the question list, the documents, or the active filter
/// changes, never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    pub columns: Vec<ColumnMeta>,
    pub rows: Vec<MatrixRow>,
}

impl ComparisonMatrix {
    /// Cell at (row, column), if in range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }
}
