use std::time::Duration;

use crate::types::{CreateProjectRequest, Project};

/// Base URL the extraction service listens on by default.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Extraction service API client (blocking).
#[derive(Debug, Clone)]
pub struct ExtractClient {
    http: reqwest::blocking::Client,
    api_base: String,
}

/// Error type for service operations.
#[derive(Debug)]
pub enum ClientError {
    /// Network error (connect, timeout, DNS)
    Network(String),
    /// HTTP error with status code
    Http(u16, String),
    /// Response body was not the expected JSON shape
    Parse(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Http(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            ClientError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl ExtractClient {
    /// Create a client against an explicit base URL. A trailing slash on
    /// `api_base` is tolerated.
    pub fn new(api_base: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("lexsift/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// List all projects.
    pub fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let url = format!("{}/list-projects", self.api_base);
        let resp = self.get(&url)?;
        resp.json::<Vec<Project>>().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// List source files available for new projects.
    pub fn list_available_files(&self) -> Result<Vec<String>, ClientError> {
        let url = format!("{}/list-available-files", self.api_base);
        let resp = self.get(&url)?;
        resp.json::<Vec<String>>().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Create a project over a set of named source files. Parsing happens
    /// asynchronously on the server; the returned snapshot starts pending.
    pub fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
        filenames: &[String],
    ) -> Result<Project, ClientError> {
        let url = format!("{}/create-project-async", self.api_base);
        let body = CreateProjectRequest {
            name: name.to_string(),
            description: description.map(String::from),
            filenames: filenames.to_vec(),
        };
        let resp = self.post_json(&url, &serde_json::to_value(&body).expect("request serializes"))?;
        resp.json::<Project>().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Fetch a full project snapshot (documents + answers).
    pub fn get_project(&self, id: &str) -> Result<Project, ClientError> {
        let url = format!("{}/get-project-info/{}", self.api_base, id);
        let resp = self.get(&url)?;
        resp.json::<Project>().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Trigger extraction of the given questions across all project
    /// documents. The question list itself is the JSON body.
    pub fn generate_answers(
        &self,
        project_id: &str,
        questions: &[String],
    ) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}/generate-all-answers/{}", self.api_base, project_id);
        let body = serde_json::to_value(questions).expect("question list serializes");
        let resp = self.post_json(&url, &body)?;
        resp.json::<serde_json::Value>().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Delete a project and its extraction results.
    pub fn delete_project(&self, project_id: &str) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}/delete-project/{}", self.api_base, project_id);
        let response = self
            .http
            .delete(&url)
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Http(status, body));
        }

        response.json::<serde_json::Value>().map_err(|e| ClientError::Parse(e.to_string()))
    }

    // ── Internal helpers ────────────────────────────────────────────

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, ClientError> {
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Http(status, body));
        }

        Ok(response)
    }

    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::blocking::Response, ClientError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Http(status, body));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ExtractClient::new("http://localhost:8000/api/");
        assert_eq!(client.api_base, "http://localhost:8000/api");
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ClientError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ClientError::Http(404, "project not found".into()).to_string(),
            "HTTP 404: project not found"
        );
        assert_eq!(
            ClientError::Parse("missing field `id`".into()).to_string(),
            "Parse error: missing field `id`"
        );
    }
}
