//! Comparison matrix construction.
//!
//! Joins an ordered question list against an ordered document list into a
//! dense grid. Row order follows the question list, column order follows
//! document arrival order, and every (question, document) pair resolves to
//! exactly one cell.
//!
//! Join semantics:
//! - exact string equality on question text, no trimming or case folding;
//! - no matching record ⇒ `Cell::Absent`;
//! - duplicate question text within one document ⇒ the first record in the
//!   document's answer sequence wins. The upstream provider is expected not
//!   to send duplicates; the tie-break keeps the output deterministic when
//!   it does.

use crate::model::{AnswerRecord, Cell, ColumnMeta, ComparisonMatrix, DocumentColumn, MatrixRow};

/// Build the question × document matrix. Pure and idempotent: identical
/// inputs produce identical matrices.
pub fn build(questions: &[String], documents: &[DocumentColumn]) -> ComparisonMatrix {
    let columns = documents
        .iter()
        .map(|doc| ColumnMeta {
            id: doc.id.clone(),
            filename: doc.filename.clone(),
        })
        .collect();

    let rows = questions
        .iter()
        .map(|question| MatrixRow {
            question: question.clone(),
            cells: documents
                .iter()
                .map(|doc| resolve_cell(question, &doc.answers))
                .collect(),
        })
        .collect();

    ComparisonMatrix { columns, rows }
}

/// First record whose question matches exactly, or Absent.
fn resolve_cell(question: &str, answers: &[AnswerRecord]) -> Cell {
    answers
        .iter()
        .find(|record| record.question == question)
        .map(|record| Cell::Answered(record.clone()))
        .unwrap_or(Cell::Absent)
}
