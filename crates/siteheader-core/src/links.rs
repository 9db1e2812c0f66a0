//! Relative link resolution from nested pages

use crate::error::HeaderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix from the current page back to the site root
///
/// `"."` means the page sits at the root and links stay page-relative.
/// Anything else (e.g. `".."`) is prepended to every link with a `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootPath(String);

impl RootPath {
    pub fn new(value: impl Into<String>) -> Result<Self, HeaderError> {
        let value = value.into();
        if value.is_empty() {
            return Err(HeaderError::InvalidRootPath {
                value,
                reason: "must not be empty".to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_site_root(&self) -> bool {
        self.0 == "."
    }

    /// Link to `page` as seen from the current page
    pub fn resolve(&self, page: &str) -> String {
        if self.is_site_root() {
            page.to_string()
        } else {
            format!("{}/{}", self.0, page)
        }
    }
}

impl Default for RootPath {
    fn default() -> Self {
        Self(".".to_string())
    }
}

impl fmt::Display for RootPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RootPath {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RootPath {
    type Error = HeaderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RootPath> for String {
    fn from(root: RootPath) -> Self {
        root.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_root_leaves_page_unchanged() {
        let root = RootPath::default();
        assert_eq!(root.resolve("x.html"), "x.html");
        assert_eq!(root.resolve("index.html"), "index.html");
    }

    #[test]
    fn test_nested_root_prefixes_page() {
        for prefix in ["..", "../..", "./", "/site"] {
            let root = RootPath::new(prefix).unwrap();
            assert_eq!(root.resolve("x.html"), format!("{}/x.html", prefix));
        }
    }

    #[test]
    fn test_empty_root_rejected() {
        let err = "".parse::<RootPath>().unwrap_err();
        assert!(matches!(err, HeaderError::InvalidRootPath { .. }));
    }

    #[test]
    fn test_serde_round_trip_through_string() {
        let root: RootPath = serde_json::from_str("\"..\"").unwrap();
        assert_eq!(root.as_str(), "..");
        assert!(serde_json::from_str::<RootPath>("\"\"").is_err());
    }
}
