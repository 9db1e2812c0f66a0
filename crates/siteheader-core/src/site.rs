//! Site configuration and built-in presets
//!
//! One parametrized header serves every site: the title shown next to the
//! logo glyph and whether the theme toggle is present are the only things
//! that differ between them.

use crate::error::HeaderError;
use crate::theme::ThemeFallback;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default id of the element the header is mounted into
pub const DEFAULT_PLACEHOLDER_ID: &str = "site-header";

/// Per-site header configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Text after the `>` glyph in the logo link
    pub title: String,

    /// Render the light/dark toggle and initialize the theme on render
    #[serde(default)]
    pub theme_toggle: bool,

    #[serde(default = "default_placeholder_id")]
    pub placeholder_id: String,

    #[serde(default)]
    pub theme_fallback: ThemeFallback,
}

fn default_placeholder_id() -> String {
    DEFAULT_PLACEHOLDER_ID.to_string()
}

impl SiteConfig {
    pub fn new(title: impl Into<String>, theme_toggle: bool) -> Self {
        Self {
            title: title.into(),
            theme_toggle,
            placeholder_id: default_placeholder_id(),
            theme_fallback: ThemeFallback::default(),
        }
    }

    pub fn mediumroast() -> Self {
        Self::new("_mediumroast", true)
    }

    pub fn jason_bauman() -> Self {
        Self::new("_jason_bauman", false)
    }

    /// Look up a built-in preset by name
    pub fn preset(name: &str) -> Result<Self, HeaderError> {
        match name {
            "mediumroast" => Ok(Self::mediumroast()),
            "jason_bauman" | "jason-bauman" => Ok(Self::jason_bauman()),
            other => Err(HeaderError::UnknownSite {
                name: other.to_string(),
            }),
        }
    }

    /// Load a site config from a TOML file
    pub fn load(path: &Path) -> Result<Self, HeaderError> {
        let content = std::fs::read_to_string(path).map_err(|source| HeaderError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| HeaderError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let mr = SiteConfig::preset("mediumroast").unwrap();
        assert_eq!(mr.title, "_mediumroast");
        assert!(mr.theme_toggle);

        let jb = SiteConfig::preset("jason-bauman").unwrap();
        assert_eq!(jb, SiteConfig::jason_bauman());
        assert!(!jb.theme_toggle);
        assert_eq!(jb.placeholder_id, "site-header");
    }

    #[test]
    fn test_unknown_preset() {
        let err = SiteConfig::preset("nope").unwrap_err();
        assert!(matches!(err, HeaderError::UnknownSite { name } if name == "nope"));
    }

    #[test]
    fn test_load_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "title = \"_notes\"\n").unwrap();

        let site = SiteConfig::load(&path).unwrap();
        assert_eq!(site.title, "_notes");
        assert!(!site.theme_toggle);
        assert_eq!(site.placeholder_id, DEFAULT_PLACEHOLDER_ID);
        assert_eq!(site.theme_fallback, ThemeFallback::AlwaysDark);
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(
            &path,
            "title = \"_notes\"\ntheme_toggle = true\nplaceholder_id = \"top\"\ntheme_fallback = \"system\"\n",
        )
        .unwrap();

        let site = SiteConfig::load(&path).unwrap();
        assert!(site.theme_toggle);
        assert_eq!(site.placeholder_id, "top");
        assert_eq!(site.theme_fallback, ThemeFallback::System);
    }

    #[test]
    fn test_load_errors_carry_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            SiteConfig::load(&missing),
            Err(HeaderError::ConfigRead { path, .. }) if path == missing
        ));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "theme_toggle = true\n").unwrap();
        assert!(matches!(
            SiteConfig::load(&bad),
            Err(HeaderError::ConfigParse { .. })
        ));
    }
}
