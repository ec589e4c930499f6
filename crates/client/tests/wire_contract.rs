//! Wire contract tests for extraction service payloads.
//!
//! These pin the JSON shapes the client depends on. If the service renames
//! a field, these fail before the CLI misbehaves at runtime.

use lexsift_client::Project;

const PROJECT_PAYLOAD: &str = r#"{
    "id": "7c1f2a9e-3d7b-4a57-9f0e-2f6f4af0a001",
    "name": "Acme MSA Review",
    "description": "Q3 vendor agreements",
    "created_at": "2026-07-18T10:42:00",
    "status": "completed",
    "answers": [
        {
            "question_text": "Effective Date",
            "value": "March 1, 2024",
            "confidence": 0.92,
            "citation": "This Agreement is effective as of March 1, 2024."
        },
        {
            "question_text": "Governing Law",
            "value": "Delaware",
            "confidence": 0.61
        }
    ],
    "documents": [
        { "id": "d-1", "filename": "acme_msa.pdf", "status": "parsed" },
        { "id": "d-2", "filename": "acme_sow.pdf", "status": "pending" }
    ]
}"#;

#[test]
fn full_project_payload_deserializes() {
    let project: Project = serde_json::from_str(PROJECT_PAYLOAD).unwrap();

    assert_eq!(project.id, "7c1f2a9e-3d7b-4a57-9f0e-2f6f4af0a001");
    assert_eq!(project.name, "Acme MSA Review");
    assert_eq!(project.description.as_deref(), Some("Q3 vendor agreements"));
    assert_eq!(project.status, "completed");

    assert_eq!(project.answers.len(), 2);
    assert_eq!(project.answers[0].question, "Effective Date");
    assert!(project.answers[0].citation.is_some());
    assert_eq!(project.answers[1].question, "Governing Law");
    assert_eq!(project.answers[1].citation, None);

    assert_eq!(project.documents.len(), 2);
    assert_eq!(project.documents[0].filename, "acme_msa.pdf");
    assert_eq!(project.documents[1].status, "pending");
}

#[test]
fn minimal_project_payload_uses_defaults() {
    // A freshly created project may omit answers/documents entirely
    let project: Project =
        serde_json::from_str(r#"{ "id": "p1", "name": "Empty" }"#).unwrap();

    assert_eq!(project.description, None);
    assert_eq!(project.created_at, "");
    assert_eq!(project.status, "");
    assert!(project.answers.is_empty());
    assert!(project.documents.is_empty());
}

#[test]
fn consolidated_columns_match_review_shape() {
    let project: Project = serde_json::from_str(PROJECT_PAYLOAD).unwrap();
    let columns = project.consolidated_columns();

    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].filename, "Consolidated Results");
    assert_eq!(columns[0].answers.len(), 2);
}

#[test]
fn project_list_payload_deserializes() {
    let payload = format!("[{PROJECT_PAYLOAD}]");
    let projects: Vec<Project> = serde_json::from_str(&payload).unwrap();
    assert_eq!(projects.len(), 1);
}
