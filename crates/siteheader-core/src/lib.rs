//! siteheader-core - Core library for siteheader
//!
//! Builds the shared site header (logo, mobile menu toggle, section links,
//! optional light/dark theme toggle) and drives its mount lifecycle against
//! any [`Page`] implementation. No browser dependency lives here.

pub mod error;
pub mod links;
pub mod markup;
pub mod page;
pub mod render;
pub mod sections;
pub mod site;
pub mod theme;

pub use error::HeaderError;
pub use links::RootPath;
pub use markup::{nav_links, HeaderMarkup, NavLink};
pub use page::{HeaderAction, Page, StaticDocument, Target};
pub use render::{Bindings, HeaderRenderer, PostMount};
pub use sections::{ActiveSections, Section};
pub use site::SiteConfig;
pub use theme::{
    ColorSchemeProbe, FileThemeStore, FixedProbe, MemoryThemeAttribute, MemoryThemeStore, Theme,
    ThemeAttribute, ThemeController, ThemeFallback, ThemeStore,
};
