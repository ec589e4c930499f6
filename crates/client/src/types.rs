//! Wire types for the extraction service API.
//!
//! Answers reuse the engine's `AnswerRecord` directly (its serde names
//! match the service contract), so fetched data flows into the filter and
//! matrix layers without conversion.

use serde::{Deserialize, Serialize};

use lexsift_engine::model::{AnswerRecord, DocumentColumn};

/// A source file attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub id: String,
    pub filename: String,
    /// Parse status reported by the service ("pending", "parsed", "failed").
    #[serde(default)]
    pub status: String,
}

/// A project snapshot: documents plus whatever answers extraction has
/// produced so far. Answers live at the project level on the wire; the
/// service does not group them per document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
    #[serde(default)]
    pub documents: Vec<DocumentInfo>,
}

impl Project {
    /// Fold the project-level answers into a single synthetic matrix
    /// column. The review surface compares questions against the project's
    /// consolidated results rather than per-document answer sets.
    pub fn consolidated_columns(&self) -> Vec<DocumentColumn> {
        vec![DocumentColumn {
            id: self.id.clone(),
            filename: "Consolidated Results".to_string(),
            answers: self.answers.clone(),
        }]
    }
}

/// Body for project creation. File upload is simulated by name: the
/// service resolves `filenames` against its own source-file store.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub filenames: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consolidated_columns_carry_all_answers() {
        let project = Project {
            id: "p1".into(),
            name: "Acme Review".into(),
            description: None,
            created_at: "2026-08-01T09:00:00".into(),
            status: "completed".into(),
            answers: vec![AnswerRecord {
                question: "Term".into(),
                value: "3 years".into(),
                confidence: 0.9,
                citation: None,
            }],
            documents: vec![],
        };

        let columns = project.consolidated_columns();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].id, "p1");
        assert_eq!(columns[0].filename, "Consolidated Results");
        assert_eq!(columns[0].answers, project.answers);
    }
}
