//! Light/dark theme model and controller
//!
//! The theme lives in two places: a persisted preference (key `theme`) and
//! the `data-theme` attribute on the document root that stylesheets key off.
//! Both are reached through injected traits so the controller never touches
//! ambient globals. The persisted copy is the source of truth on load, and
//! every toggle writes both copies.

use crate::error::HeaderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Storage key for the persisted preference
pub const THEME_KEY: &str = "theme";

/// Root element attribute read by the stylesheets
pub const THEME_ATTRIBUTE: &str = "data-theme";

const PREFERENCES_FILE: &str = "siteheader-preferences.json";

/// Visual palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Theme that a toggle switches to from the current attribute value.
    ///
    /// Only an exact `"dark"` flips to light; anything else, unset included,
    /// goes to dark.
    pub fn after(current: Option<&str>) -> Theme {
        match current {
            Some("dark") => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(HeaderError::UnknownTheme {
                value: other.to_string(),
            }),
        }
    }
}

/// What `initialize` applies when nothing is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeFallback {
    /// Dark regardless of the system color scheme. The system preference is
    /// still queried, then ignored.
    #[default]
    AlwaysDark,
    /// Follow `prefers-color-scheme`
    System,
}

impl ThemeFallback {
    pub fn resolve(self, prefers_dark: bool) -> Theme {
        match self {
            ThemeFallback::AlwaysDark => Theme::Dark,
            ThemeFallback::System if prefers_dark => Theme::Dark,
            ThemeFallback::System => Theme::Light,
        }
    }
}

/// Persisted key-value entry holding the theme preference
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, theme: Theme);
}

/// Theme attribute on the document root
pub trait ThemeAttribute {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str);
}

/// System color-scheme preference
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

impl<T: ThemeStore + ?Sized> ThemeStore for &mut T {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, theme: Theme) {
        (**self).save(theme)
    }
}

impl<T: ThemeAttribute + ?Sized> ThemeAttribute for &mut T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&mut self, value: &str) {
        (**self).set(value)
    }
}

/// Reads, applies, and toggles the theme over injected store and attribute
#[derive(Debug, Clone, Default)]
pub struct ThemeController<S, A> {
    store: S,
    attribute: A,
    fallback: ThemeFallback,
}

impl<S: ThemeStore, A: ThemeAttribute> ThemeController<S, A> {
    pub fn new(store: S, attribute: A) -> Self {
        Self {
            store,
            attribute,
            fallback: ThemeFallback::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: ThemeFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Apply the persisted theme, or the fallback when nothing is stored.
    ///
    /// A persisted value is applied verbatim. Never writes the store.
    pub fn initialize<P: ColorSchemeProbe + ?Sized>(&mut self, probe: &P) -> String {
        let theme = match self.store.load() {
            Some(saved) => saved,
            None => {
                let prefers_dark = probe.prefers_dark();
                let theme = self.fallback.resolve(prefers_dark);
                debug!(
                    prefers_dark,
                    fallback = ?self.fallback,
                    theme = %theme,
                    "No saved theme, using fallback"
                );
                theme.as_str().to_string()
            }
        };
        self.attribute.set(&theme);
        theme
    }

    /// Flip the theme and persist it. Attribute and store agree afterwards.
    pub fn toggle(&mut self) -> Theme {
        let current = self.attribute.get();
        let next = Theme::after(current.as_deref());
        debug!(from = ?current, to = %next, "Toggling theme");
        self.attribute.set(next.as_str());
        self.store.save(next);
        next
    }

    /// Current attribute value
    pub fn current(&self) -> Option<String> {
        self.attribute.get()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn attribute(&self) -> &A {
        &self.attribute
    }

    pub fn into_parts(self) -> (S, A) {
        (self.store, self.attribute)
    }
}

/// In-memory persisted store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value, as if written by an earlier session
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, theme: Theme) {
        self.value = Some(theme.as_str().to_string());
    }
}

/// In-memory root attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryThemeAttribute {
    value: Option<String>,
}

impl MemoryThemeAttribute {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeAttribute for MemoryThemeAttribute {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

/// Probe with a fixed answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedProbe(pub bool);

impl ColorSchemeProbe for FixedProbe {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    theme: Theme,
}

/// Theme preference persisted as JSON in `<dir>/siteheader-preferences.json`
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    dir: PathBuf,
}

impl FileThemeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILE)
    }

    fn write(&self, theme: Theme) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(&StoredPreference { theme })?;
        std::fs::write(self.path(), content)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ThemeStore for FileThemeStore {
    /// Returns `None` on any I/O or parse error (graceful degradation).
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.path()).ok()?;
        match serde_json::from_str::<StoredPreference>(&content) {
            Ok(pref) => Some(pref.theme.as_str().to_string()),
            Err(e) => {
                warn!(path = %self.path().display(), error = %e, "Ignoring unreadable theme preference");
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) {
        if let Err(e) = self.write(theme) {
            warn!(path = %self.path().display(), error = %e, "Failed to persist theme preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(
        store: MemoryThemeStore,
    ) -> ThemeController<MemoryThemeStore, MemoryThemeAttribute> {
        ThemeController::new(store, MemoryThemeAttribute::new())
    }

    #[test]
    fn test_theme_after() {
        assert_eq!(Theme::after(Some("dark")), Theme::Light);
        assert_eq!(Theme::after(Some("light")), Theme::Dark);
        assert_eq!(Theme::after(None), Theme::Dark);
        assert_eq!(Theme::after(Some("sepia")), Theme::Dark);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_initialize_uses_saved_light() {
        let mut ctl = controller(MemoryThemeStore::with_value("light"));
        assert_eq!(ctl.initialize(&FixedProbe(true)), "light");
        assert_eq!(ctl.current().as_deref(), Some("light"));
    }

    #[test]
    fn test_initialize_saved_value_is_verbatim() {
        let mut ctl = controller(MemoryThemeStore::with_value("solarized"));
        ctl.initialize(&FixedProbe(false));
        assert_eq!(ctl.current().as_deref(), Some("solarized"));
    }

    #[test]
    fn test_initialize_without_saved_is_dark_regardless_of_system() {
        for prefers_dark in [true, false] {
            let mut ctl = controller(MemoryThemeStore::new());
            assert_eq!(ctl.initialize(&FixedProbe(prefers_dark)), "dark");
            // Initialization never persists
            assert_eq!(ctl.store().load(), None);
        }
    }

    #[test]
    fn test_system_fallback_follows_probe() {
        let mut ctl = controller(MemoryThemeStore::new()).with_fallback(ThemeFallback::System);
        assert_eq!(ctl.initialize(&FixedProbe(false)), "light");
        let mut ctl = controller(MemoryThemeStore::new()).with_fallback(ThemeFallback::System);
        assert_eq!(ctl.initialize(&FixedProbe(true)), "dark");
    }

    #[test]
    fn test_toggle_writes_both_copies() {
        let mut ctl = controller(MemoryThemeStore::new());
        ctl.initialize(&FixedProbe(false));

        assert_eq!(ctl.toggle(), Theme::Light);
        assert_eq!(ctl.current().as_deref(), Some("light"));
        assert_eq!(ctl.store().load().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut ctl = controller(MemoryThemeStore::with_value("light"));
        ctl.initialize(&FixedProbe(false));

        ctl.toggle();
        assert_eq!(ctl.current().as_deref(), Some("dark"));
        ctl.toggle();
        assert_eq!(ctl.current().as_deref(), Some("light"));
        assert_eq!(ctl.store().load().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_from_unset_goes_dark() {
        let mut ctl = controller(MemoryThemeStore::new());
        assert_eq!(ctl.toggle(), Theme::Dark);
        assert_eq!(ctl.store().load().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileThemeStore::new(dir.path().join("nested"));
        assert_eq!(store.load(), None);

        store.save(Theme::Light);
        assert_eq!(store.load().as_deref(), Some("light"));

        let reopened = FileThemeStore::new(dir.path().join("nested"));
        assert_eq!(reopened.load().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::new(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_writes_lowercase_theme() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileThemeStore::new(dir.path());
        store.save(Theme::Dark);

        let content = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["theme"], "dark");

        std::fs::write(store.path(), r#"{"theme":"sepia"}"#).unwrap();
        assert_eq!(store.load(), None);
    }
}
