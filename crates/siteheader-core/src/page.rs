//! Host page abstraction
//!
//! [`Page`] is the slice of the DOM the header needs: the location path, a
//! placeholder to replace, element lookup, click binding and class toggling.
//! The browser crate implements it over web-sys; [`StaticDocument`] implements
//! it over an HTML string for prerendering and tests.

use crate::error::HeaderError;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Header element the lifecycle looks up after mounting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    MobileMenuButton,
    NavLinks,
    ThemeToggle,
}

impl Target {
    /// CSS selector for the element
    pub fn selector(self) -> &'static str {
        match self {
            Target::MobileMenuButton => ".mobile-menu-btn",
            Target::NavLinks => ".nav-links",
            Target::ThemeToggle => "#theme-toggle",
        }
    }

    /// Attribute text identifying the element in generated markup
    pub fn marker(self) -> &'static str {
        match self {
            Target::MobileMenuButton => "class=\"mobile-menu-btn\"",
            Target::NavLinks => "class=\"nav-links\"",
            Target::ThemeToggle => "id=\"theme-toggle\"",
        }
    }
}

/// What a click on a bound header element does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderAction {
    /// Toggle the `active` class on the nav links container
    ToggleMobileMenu,
    ToggleTheme,
}

/// Host page the header is mounted into
pub trait Page {
    /// Current location path, e.g. `/blog/post-1.html`
    fn location_path(&self) -> String;

    /// Replace the inner HTML of the element with `id`.
    ///
    /// Everything previously inside the placeholder, handlers included, is
    /// discarded.
    fn replace_placeholder(&mut self, id: &str, html: &str) -> Result<(), HeaderError>;

    fn has_element(&self, target: Target) -> bool;

    /// Assign the click handler of `target`. Re-binding replaces, never stacks.
    fn bind_click(&mut self, target: Target, action: HeaderAction);

    /// Toggle `class` on `target`. Returns whether the class is now present.
    fn toggle_class(&mut self, target: Target, class: &str) -> bool;
}

/// In-memory host HTML document
#[derive(Debug, Clone)]
pub struct StaticDocument {
    path: String,
    html: String,
    bindings: HashMap<Target, HeaderAction>,
    classes: HashMap<Target, BTreeSet<String>>,
}

impl StaticDocument {
    pub fn new(path: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            html: html.into(),
            bindings: HashMap::new(),
            classes: HashMap::new(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Action bound to `target`, if any
    pub fn binding(&self, target: Target) -> Option<HeaderAction> {
        self.bindings.get(&target).copied()
    }

    /// Simulate a click: returns the bound action for the caller to dispatch
    pub fn click(&self, target: Target) -> Option<HeaderAction> {
        self.binding(target)
    }

    /// Whether `class` has been toggled on for `target` since the last mount
    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.classes
            .get(&target)
            .is_some_and(|set| set.contains(class))
    }

    /// Byte range of the inner HTML of the element with `id`
    fn placeholder_range(&self, id: &str) -> Option<(usize, usize)> {
        let open = Regex::new(&format!(
            r#"<([A-Za-z][A-Za-z0-9-]*)(?:\s[^>]*?)?\sid\s*=\s*["']{}["'][^>]*>"#,
            regex::escape(id)
        ))
        .ok()?;
        let caps = open.captures(&self.html)?;
        let whole = caps.get(0)?;
        let tag = caps.get(1)?.as_str();
        let inner_start = whole.end();

        // Nested elements of the same tag need depth counting
        let tags = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*?(/?)>", regex::escape(tag))).ok()?;
        let mut depth = 1usize;
        for m in tags.captures_iter(&self.html[inner_start..]) {
            let closing = m.get(1).is_some_and(|g| !g.as_str().is_empty());
            let self_closing = m.get(2).is_some_and(|g| !g.as_str().is_empty());
            if closing {
                depth -= 1;
                if depth == 0 {
                    let close_start = inner_start + m.get(0)?.start();
                    return Some((inner_start, close_start));
                }
            } else if !self_closing {
                depth += 1;
            }
        }

        debug!(id, tag, "Placeholder has no closing tag");
        None
    }
}

impl Page for StaticDocument {
    fn location_path(&self) -> String {
        self.path.clone()
    }

    fn replace_placeholder(&mut self, id: &str, html: &str) -> Result<(), HeaderError> {
        let (start, end) =
            self.placeholder_range(id)
                .ok_or_else(|| HeaderError::PlaceholderMissing { id: id.to_string() })?;
        self.html.replace_range(start..end, html);
        self.bindings.clear();
        self.classes.clear();
        Ok(())
    }

    fn has_element(&self, target: Target) -> bool {
        self.html.contains(target.marker())
    }

    fn bind_click(&mut self, target: Target, action: HeaderAction) {
        self.bindings.insert(target, action);
    }

    fn toggle_class(&mut self, target: Target, class: &str) -> bool {
        if !self.has_element(target) {
            return false;
        }
        let set = self.classes.entry(target).or_default();
        if set.remove(class) {
            false
        } else {
            set.insert(class.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "<html><body><div id=\"site-header\"></div><main>hi</main></body></html>";

    #[test]
    fn test_replace_empty_placeholder() {
        let mut doc = StaticDocument::new("/", HOST);
        doc.replace_placeholder("site-header", "<header>x</header>")
            .unwrap();
        assert_eq!(
            doc.html(),
            "<html><body><div id=\"site-header\"><header>x</header></div><main>hi</main></body></html>"
        );
    }

    #[test]
    fn test_replace_is_repeatable() {
        let mut doc = StaticDocument::new("/", HOST);
        doc.replace_placeholder("site-header", "<div class=\"a\"><div>1</div></div>")
            .unwrap();
        doc.replace_placeholder("site-header", "<p>2</p>").unwrap();
        assert!(doc.html().contains("<div id=\"site-header\"><p>2</p></div><main>"));
        assert!(!doc.html().contains("class=\"a\""));
    }

    #[test]
    fn test_missing_placeholder_fails() {
        let mut doc = StaticDocument::new("/", "<body><div id=\"other\"></div></body>");
        let err = doc.replace_placeholder("site-header", "<header/>").unwrap_err();
        assert!(matches!(err, HeaderError::PlaceholderMissing { id } if id == "site-header"));
    }

    #[test]
    fn test_single_quoted_id_and_other_tag() {
        let mut doc = StaticDocument::new("/", "<body><section class='x' id='site-header'>old</section></body>");
        doc.replace_placeholder("site-header", "new").unwrap();
        assert_eq!(doc.html(), "<body><section class='x' id='site-header'>new</section></body>");
    }

    #[test]
    fn test_attribute_ending_in_id_is_not_the_placeholder() {
        let mut doc = StaticDocument::new(
            "/",
            "<body><div data-id=\"site-header\">keep</div><div id=\"site-header\"></div></body>",
        );
        doc.replace_placeholder("site-header", "<header/>").unwrap();
        assert_eq!(
            doc.html(),
            "<body><div data-id=\"site-header\">keep</div><div id=\"site-header\"><header/></div></body>"
        );

        let mut only_decoy = StaticDocument::new("/", "<div data-id=\"site-header\"></div>");
        assert!(matches!(
            only_decoy.replace_placeholder("site-header", "x"),
            Err(HeaderError::PlaceholderMissing { .. })
        ));
    }

    #[test]
    fn test_bindings_assign_and_reset_on_replace() {
        let mut doc = StaticDocument::new("/", HOST);
        doc.bind_click(Target::ThemeToggle, HeaderAction::ToggleMobileMenu);
        doc.bind_click(Target::ThemeToggle, HeaderAction::ToggleTheme);
        assert_eq!(doc.click(Target::ThemeToggle), Some(HeaderAction::ToggleTheme));

        doc.replace_placeholder("site-header", "").unwrap();
        assert_eq!(doc.click(Target::ThemeToggle), None);
    }

    #[test]
    fn test_toggle_class_requires_element() {
        let mut doc = StaticDocument::new("/", HOST);
        assert!(!doc.toggle_class(Target::NavLinks, "active"));

        doc.replace_placeholder("site-header", "<div class=\"nav-links\"></div>")
            .unwrap();
        assert!(doc.toggle_class(Target::NavLinks, "active"));
        assert!(doc.has_class(Target::NavLinks, "active"));
        assert!(!doc.toggle_class(Target::NavLinks, "active"));
        assert!(!doc.has_class(Target::NavLinks, "active"));
    }
}
