//! web-sys backed theme storage, root attribute, and location access
//!
//! Persistence is best-effort: storage and attribute writes that the browser
//! rejects (private mode, quota) are dropped silently.

use siteheader_core::theme::{THEME_ATTRIBUTE, THEME_KEY};
use siteheader_core::{ColorSchemeProbe, Theme, ThemeAttribute, ThemeController, ThemeStore};
use wasm_bindgen::JsCast;

/// `localStorage` entry under `theme`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageThemeStore;

/// `data-theme` attribute on `<html>`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentThemeAttribute;

/// `prefers-color-scheme` media query
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryProbe;

pub type BrowserThemeController = ThemeController<LocalStorageThemeStore, DocumentThemeAttribute>;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&mut self, theme: Theme) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, theme.as_str());
        }
    }
}

impl ThemeAttribute for DocumentThemeAttribute {
    fn get(&self) -> Option<String> {
        document_element()?.get_attribute(THEME_ATTRIBUTE)
    }

    fn set(&mut self, value: &str) {
        if let Some(el) = document_element() {
            let _ = el.set_attribute(THEME_ATTRIBUTE, value);
        }
    }
}

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
}

pub fn theme_controller() -> BrowserThemeController {
    ThemeController::new(LocalStorageThemeStore, DocumentThemeAttribute)
}

/// `window.location.pathname`, empty outside a browser
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Element with `id`, if present and an HTML element
pub fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
