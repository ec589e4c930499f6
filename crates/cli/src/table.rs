//! Plain-text rendering of the comparison matrix.
//!
//! Columns are padded to their widest cell; absent cells print an em-dash
//! so a question nobody answered never looks like an empty answer. Long
//! values are truncated with an ellipsis; the CSV export is the place for
//! full fidelity.

use lexsift_engine::{Cell, ComparisonMatrix};

/// Widest a cell may render before truncation.
const MAX_CELL_WIDTH: usize = 48;

/// Placeholder for absent cells in interactive views.
const ABSENT_MARKER: &str = "\u{2014}";

/// Render the matrix as an aligned text table.
pub fn render(matrix: &ComparisonMatrix) -> String {
    let mut header: Vec<String> = Vec::with_capacity(matrix.columns.len() + 1);
    header.push("Field / Question".to_string());
    for column in &matrix.columns {
        header.push(clip(&column.filename));
    }

    let mut body: Vec<Vec<String>> = Vec::with_capacity(matrix.rows.len());
    for row in &matrix.rows {
        let mut cells = Vec::with_capacity(row.cells.len() + 1);
        cells.push(clip(&row.question));
        for cell in &row.cells {
            cells.push(cell_text(cell));
        }
        body.push(cells);
    }

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    push_separator(&mut out, &widths);
    for cells in &body {
        push_row(&mut out, cells, &widths);
    }
    out
}

/// Cell text: `value (NN%)`, with a section-mark suffix when a citation
/// backs the answer.
fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Answered(record) => {
            let percent = (record.confidence * 100.0).round() as i64;
            let cited = if record.citation.is_some() { " \u{00a7}" } else { "" };
            clip(&format!("{} ({}%){}", record.value, percent, cited))
        }
        Cell::Absent => ABSENT_MARKER.to_string(),
    }
}

fn clip(text: &str) -> String {
    // Keep rendering single-line: embedded newlines become spaces
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() <= MAX_CELL_WIDTH {
        return flat;
    }
    let mut clipped: String = flat.chars().take(MAX_CELL_WIDTH - 1).collect();
    clipped.push('\u{2026}');
    clipped
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        if i < cells.len() - 1 {
            let pad = widths[i].saturating_sub(cell.chars().count());
            out.extend(std::iter::repeat(' ').take(pad));
        }
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize]) {
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.extend(std::iter::repeat('-').take(*width));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexsift_engine::build;
    use lexsift_engine::model::{AnswerRecord, DocumentColumn};

    fn record(question: &str, value: &str, confidence: f64, citation: Option<&str>) -> AnswerRecord {
        AnswerRecord {
            question: question.into(),
            value: value.into(),
            confidence,
            citation: citation.map(String::from),
        }
    }

    fn sample_matrix() -> ComparisonMatrix {
        let questions = vec!["Effective Date".to_string(), "Governing Law".to_string()];
        let documents = vec![DocumentColumn {
            id: "d1".into(),
            filename: "msa.pdf".into(),
            answers: vec![record("Effective Date", "2024-03-01", 0.92, Some("s.1"))],
        }];
        build(&questions, &documents)
    }

    #[test]
    fn absent_cells_render_em_dash() {
        let table = render(&sample_matrix());
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[3].contains('\u{2014}'));
    }

    #[test]
    fn answered_cells_show_value_percent_and_citation_mark() {
        let table = render(&sample_matrix());
        assert!(table.contains("2024-03-01 (92%) \u{00a7}"));
    }

    #[test]
    fn header_and_separator_come_first() {
        let table = render(&sample_matrix());
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("Field / Question"));
        assert!(lines[0].contains("msa.pdf"));
        assert!(lines[1].chars().all(|c| c == '-' || c == ' '));
    }

    #[test]
    fn long_values_are_clipped() {
        let long = "x".repeat(200);
        let questions = vec!["Q".to_string()];
        let documents = vec![DocumentColumn {
            id: "d1".into(),
            filename: "a.pdf".into(),
            answers: vec![record("Q", &long, 0.5, None)],
        }];
        let table = render(&build(&questions, &documents));
        for line in table.lines() {
            assert!(line.chars().count() < 140, "line too wide: {}", line.len());
        }
        assert!(table.contains('\u{2026}'));
    }

    #[test]
    fn newlines_in_values_stay_on_one_row() {
        let questions = vec!["Q".to_string()];
        let documents = vec![DocumentColumn {
            id: "d1".into(),
            filename: "a.pdf".into(),
            answers: vec![record("Q", "line one\nline two", 0.5, None)],
        }];
        let table = render(&build(&questions, &documents));
        // header + separator + one data row
        assert_eq!(table.lines().count(), 3);
    }
}
