// Application settings
// Loaded from ~/.config/lexsift/settings.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the extraction service API.
    pub api_base: String,

    /// Directory exports are written into. None = current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Fields requested when a command doesn't specify its own.
    pub default_fields: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000/api".to_string(),
            export_dir: None,
            default_fields: vec![
                "Effective Date".to_string(),
                "Governing Law".to_string(),
                "Parties Involved".to_string(),
                "Termination Clause".to_string(),
            ],
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lexsift");
        config_dir.join("settings.toml")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path (testable variant of `load`)
    pub fn load_from(path: &PathBuf) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path.display(), e);
                    eprintln!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save current settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, contents).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.api_base, "http://localhost:8000/api");
        assert_eq!(settings.export_dir, None);
        assert_eq!(settings.default_fields.len(), 4);
    }

    #[test]
    fn toml_roundtrip() {
        let mut settings = Settings::default();
        settings.api_base = "https://extract.internal:8443/api".into();
        settings.export_dir = Some(PathBuf::from("/tmp/exports"));

        let text = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let settings: Settings =
            toml::from_str(r#"api_base = "http://staging:8000/api""#).unwrap();
        assert_eq!(settings.api_base, "http://staging:8000/api");
        assert_eq!(settings.default_fields.len(), 4);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = PathBuf::from("/nonexistent/lexsift/settings.toml");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
