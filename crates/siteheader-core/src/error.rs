//! Error types for siteheader-core
//!
//! Only page-authoring and configuration mistakes surface as errors. Missing
//! optional elements (menu button, theme toggle) are skipped, not reported.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for header operations
#[derive(Error, Debug)]
pub enum HeaderError {
    // ===================
    // Mount Errors
    // ===================
    #[error("Header placeholder not found: #{id}")]
    PlaceholderMissing { id: String },

    #[error("Invalid root path: {value:?} - {reason}")]
    InvalidRootPath { value: String, reason: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Unknown site preset: {name}")]
    UnknownSite { name: String },

    #[error("Unknown theme: {value}")]
    UnknownTheme { value: String },

    #[error("Failed to read site config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse site config in {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl HeaderError {
    /// Actionable hint for the person authoring the host page or config
    pub fn suggestion(&self) -> Option<String> {
        match self {
            HeaderError::PlaceholderMissing { id } => Some(format!(
                "Add an empty placeholder to the page: <div id=\"{}\"></div>",
                id
            )),
            HeaderError::InvalidRootPath { .. } => {
                Some("Use \".\" for top-level pages or \"..\" for pages one level deep".to_string())
            }
            HeaderError::UnknownSite { .. } => {
                Some("Known presets: mediumroast, jason_bauman".to_string())
            }
            HeaderError::ConfigRead { path, .. } => {
                Some(format!("Check the file exists: ls {}", path.display()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_missing_message() {
        let err = HeaderError::PlaceholderMissing {
            id: "site-header".to_string(),
        };
        assert_eq!(err.to_string(), "Header placeholder not found: #site-header");
        assert!(err.suggestion().unwrap().contains("id=\"site-header\""));
    }

    #[test]
    fn test_unknown_theme_has_no_suggestion() {
        let err = HeaderError::UnknownTheme {
            value: "sepia".to_string(),
        };
        assert!(err.suggestion().is_none());
    }
}
