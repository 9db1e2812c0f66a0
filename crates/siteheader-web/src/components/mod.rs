//! Leptos UI components

mod site_header;
mod theme_toggle;

pub use site_header::SiteHeader;
pub use theme_toggle::ThemeToggle;
