//! Header mount lifecycle
//!
//! `render` runs synchronously: classify the location, build markup, replace
//! the placeholder and (on theme-enabled sites) initialize the theme. Handler
//! wiring happens afterwards through the returned [`PostMount`], once the new
//! elements exist. Hosts run it once the DOM has settled; tests call it
//! directly.

use crate::error::HeaderError;
use crate::links::RootPath;
use crate::markup::HeaderMarkup;
use crate::page::{HeaderAction, Page, Target};
use crate::sections::ActiveSections;
use crate::site::SiteConfig;
use crate::theme::{ColorSchemeProbe, ThemeAttribute, ThemeController, ThemeStore};
use tracing::{debug, info};

/// Renders one site's header into host pages
#[derive(Debug, Clone)]
pub struct HeaderRenderer {
    site: SiteConfig,
    root: RootPath,
}

impl HeaderRenderer {
    pub fn new(site: SiteConfig, root: RootPath) -> Self {
        Self { site, root }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn root(&self) -> &RootPath {
        &self.root
    }

    /// Header markup for `path` without mounting it anywhere
    pub fn markup(&self, path: &str) -> String {
        HeaderMarkup::build(&self.site, &self.root, path)
    }

    /// Mount the header into `page`.
    ///
    /// Fails only when the placeholder is absent, which is a page-authoring
    /// bug. The returned [`PostMount`] must be run to make the header
    /// interactive.
    pub fn render<P, S, A, C>(
        &self,
        page: &mut P,
        theme: &mut ThemeController<S, A>,
        probe: &C,
    ) -> Result<PostMount, HeaderError>
    where
        P: Page + ?Sized,
        S: ThemeStore,
        A: ThemeAttribute,
        C: ColorSchemeProbe + ?Sized,
    {
        let path = page.location_path();
        let html = self.markup(&path);
        page.replace_placeholder(&self.site.placeholder_id, &html)?;
        let active: Vec<_> = ActiveSections::classify(&path).active().collect();
        info!(
            site = %self.site.title,
            root = %self.root,
            path = %path,
            active = ?active,
            "Header mounted"
        );

        if self.site.theme_toggle {
            theme.initialize(probe);
        }

        Ok(PostMount {
            theme_toggle: self.site.theme_toggle,
        })
    }

    /// Run the behavior bound to a clicked header element
    pub fn dispatch<P, S, A>(
        &self,
        action: HeaderAction,
        page: &mut P,
        theme: &mut ThemeController<S, A>,
    ) where
        P: Page + ?Sized,
        S: ThemeStore,
        A: ThemeAttribute,
    {
        match action {
            HeaderAction::ToggleMobileMenu => {
                let open = page.toggle_class(Target::NavLinks, "active");
                debug!(open, "Mobile menu toggled");
            }
            HeaderAction::ToggleTheme => {
                theme.toggle();
            }
        }
    }
}

/// Deferred handler wiring for a freshly mounted header
#[must_use = "the header stays inert until PostMount::attach runs"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostMount {
    theme_toggle: bool,
}

/// Which handlers a post-mount pass attached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    pub mobile_menu: bool,
    pub theme_toggle: bool,
}

impl PostMount {
    /// Attach click handlers to whatever header elements exist now.
    ///
    /// Missing elements are skipped and their buttons stay inert.
    pub fn attach<P: Page + ?Sized>(self, page: &mut P) -> Bindings {
        let mut bindings = Bindings::default();

        if page.has_element(Target::MobileMenuButton) && page.has_element(Target::NavLinks) {
            page.bind_click(Target::MobileMenuButton, HeaderAction::ToggleMobileMenu);
            bindings.mobile_menu = true;
        } else {
            debug!("Mobile menu button or nav links missing, menu left inert");
        }

        if self.theme_toggle {
            if page.has_element(Target::ThemeToggle) {
                page.bind_click(Target::ThemeToggle, HeaderAction::ToggleTheme);
                bindings.theme_toggle = true;
            } else {
                debug!("Theme toggle missing, left inert");
            }
        }

        bindings
    }
}
