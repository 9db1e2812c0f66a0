//! CLI commands for prerendering headers and managing the stored theme
//!
//! Commands operate on `siteheader-core` types directly; `main.rs` only
//! parses arguments and prints results.

use anyhow::{Context, Result};
use siteheader_core::{
    FileThemeStore, FixedProbe, HeaderRenderer, MemoryThemeAttribute, MemoryThemeStore, RootPath,
    SiteConfig, StaticDocument, Theme, ThemeController, ThemeFallback, ThemeStore,
};
use std::path::Path;
use tracing::{debug, info};

/// Preset used when neither `--site` nor `--config` is given
pub const DEFAULT_SITE: &str = "mediumroast";

// ============================================================================
// Site resolution
// ============================================================================

/// Pick the site config: an explicit config file wins over a preset name
pub fn resolve_site(site: Option<&str>, config: Option<&Path>) -> Result<SiteConfig> {
    if let Some(path) = config {
        return SiteConfig::load(path)
            .with_context(|| format!("Failed to load site config {}", path.display()));
    }
    let name = site.unwrap_or(DEFAULT_SITE);
    SiteConfig::preset(name).with_context(|| format!("Unknown site '{}'", name))
}

// ============================================================================
// Render
// ============================================================================

/// Header markup for `path`, or `host` with the header mounted when given
pub fn render(site: SiteConfig, root: RootPath, path: &str, host: Option<String>) -> Result<String> {
    let renderer = HeaderRenderer::new(site, root);

    let Some(host) = host else {
        return Ok(renderer.markup(path));
    };

    let mut page = StaticDocument::new(path, host);
    // Prerendering has no persisted preference; the theme is applied in the browser
    let mut theme = ThemeController::new(MemoryThemeStore::new(), MemoryThemeAttribute::new());
    let post = renderer
        .render(&mut page, &mut theme, &FixedProbe(false))
        .with_context(|| {
            format!(
                "Host page has no #{} placeholder",
                renderer.site().placeholder_id
            )
        })?;
    let bindings = post.attach(&mut page);
    debug!(
        mobile_menu = bindings.mobile_menu,
        theme_toggle = bindings.theme_toggle,
        "Header elements found"
    );

    Ok(page.into_html())
}

// ============================================================================
// Theme
// ============================================================================

/// Persisted theme, if any
pub fn theme_show(store: &FileThemeStore) -> Option<String> {
    store.load()
}

/// Theme a fresh page load would apply
pub fn theme_init(store: FileThemeStore, fallback: ThemeFallback, prefers_dark: bool) -> String {
    let mut ctl = ThemeController::new(store, MemoryThemeAttribute::new()).with_fallback(fallback);
    ctl.initialize(&FixedProbe(prefers_dark))
}

/// Load the page theme, flip it, and persist the result
pub fn theme_toggle(store: FileThemeStore, fallback: ThemeFallback, prefers_dark: bool) -> Theme {
    let mut ctl = ThemeController::new(store, MemoryThemeAttribute::new()).with_fallback(fallback);
    let before = ctl.initialize(&FixedProbe(prefers_dark));
    let after = ctl.toggle();
    info!(from = %before, to = %after, path = %ctl.store().path().display(), "Theme saved");
    after
}
