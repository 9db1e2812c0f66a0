//! Header markup builder
//!
//! Produces the `<header>` subtree that replaces the placeholder contents.
//! Class names and ids here are the contract with the site stylesheet and
//! with the post-mount hook (`mobile-menu-btn`, `nav-links`, `theme-toggle`).

use crate::links::RootPath;
use crate::sections::{ActiveSections, Section};
use crate::site::SiteConfig;
use std::fmt::Write;

/// Coffee bean, shown in dark mode
pub const COFFEE_BEAN_PATH: &str = "M12 2C8.5 2 6 4.5 6 8c0 2.5 1.5 4.5 3.5 5.5C8 14.5 7 16 7 18c0 3.5 2.5 6 5 6s5-2.5 5-6c0-2-1-3.5-2.5-4.5C16.5 12.5 18 10.5 18 8c0-3.5-2.5-6-6-6zm0 2c2.5 0 4 2 4 4 0 1.5-1 3-2.5 3.5-.5-.5-1-1-1.5-1.5-.5.5-1 1-1.5 1.5C9 11 8 9.5 8 8c0-2 1.5-4 4-4zm0 16c-2 0-3-1.5-3-4 0-1.5.5-2.5 1.5-3.5.5.5 1 1 1.5 1.5.5-.5 1-1 1.5-1.5 1 1 1.5 2 1.5 3.5 0 2.5-1 4-3 4z";

/// Coffee flower, shown in light mode
pub const COFFEE_FLOWER_PATH: &str = "M12 2c-1.1 0-2 .9-2 2 0 .7.4 1.3 1 1.7-.6.4-1 1-1 1.8 0 1.1.9 2 2 2s2-.9 2-2c0-.8-.4-1.4-1-1.8.6-.4 1-1 1-1.7 0-1.1-.9-2-2-2zm-5 6c-1.1 0-2 .9-2 2 0 .7.4 1.3 1 1.7-.6.4-1 1-1 1.8 0 1.1.9 2 2 2s2-.9 2-2c0-.8-.4-1.4-1-1.8.6-.4 1-1 1-1.7 0-1.1-.9-2-2-2zm10 0c-1.1 0-2 .9-2 2 0 .7.4 1.3 1 1.7-.6.4-1 1-1 1.8 0 1.1.9 2 2 2s2-.9 2-2c0-.8-.4-1.4-1-1.8.6-.4 1-1 1-1.7 0-1.1-.9-2-2-2zm-5 6c-1.1 0-2 .9-2 2 0 .7.4 1.3 1 1.7-.6.4-1 1-1 1.8 0 1.1.9 2 2 2s2-.9 2-2c0-.8-.4-1.4-1-1.8.6-.4 1-1 1-1.7 0-1.1-.9-2-2-2z";

/// One entry in the nav bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub section: Section,
    pub href: String,
    pub active: bool,
}

impl NavLink {
    pub fn class(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            ""
        }
    }
}

/// Section links as seen from `path`, in nav order
pub fn nav_links(root: &RootPath, path: &str) -> Vec<NavLink> {
    let active = ActiveSections::classify(path);
    Section::ALL
        .into_iter()
        .map(|section| NavLink {
            section,
            href: root.resolve(section.page()),
            active: active.get(section),
        })
        .collect()
}

/// Builds the header markup for one site
pub struct HeaderMarkup;

impl HeaderMarkup {
    pub fn build(site: &SiteConfig, root: &RootPath, path: &str) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<header>\n");
        html.push_str("    <div class=\"container\">\n");
        html.push_str("        <nav>\n");
        html.push_str("            <div class=\"logo\">\n");
        let _ = writeln!(
            html,
            "                <a href=\"{}\" style=\"color: inherit;\"><span style=\"color: var(--accent-color)\">&gt;</span> {}</a>",
            escape(&root.resolve("index.html")),
            escape(&site.title)
        );
        html.push_str("            </div>\n");
        html.push_str(
            "            <button class=\"mobile-menu-btn\" aria-label=\"Toggle Menu\">\u{2630}</button>\n",
        );
        html.push_str("            <div class=\"nav-links\">\n");
        for link in nav_links(root, path) {
            let _ = writeln!(
                html,
                "                <a href=\"{}\" class=\"{}\">{}</a>",
                escape(&link.href),
                link.class(),
                link.section.label()
            );
        }
        if site.theme_toggle {
            push_theme_toggle(&mut html);
        }
        html.push_str("            </div>\n");
        html.push_str("        </nav>\n");
        html.push_str("    </div>\n");
        html.push_str("</header>\n");

        html
    }
}

fn push_theme_toggle(html: &mut String) {
    html.push_str(
        "                <button id=\"theme-toggle\" class=\"theme-toggle\" aria-label=\"Toggle theme\" title=\"Toggle light/dark mode\">\n",
    );
    html.push_str(
        "                    <svg class=\"theme-icon\" width=\"20\" height=\"20\" viewBox=\"0 0 24 24\" fill=\"currentColor\">\n",
    );
    let _ = writeln!(
        html,
        "                        <path class=\"coffee-bean\" d=\"{}\"/>",
        COFFEE_BEAN_PATH
    );
    let _ = writeln!(
        html,
        "                        <path class=\"coffee-flower\" d=\"{}\"/>",
        COFFEE_FLOWER_PATH
    );
    html.push_str("                    </svg>\n");
    html.push_str("                </button>\n");
}

/// Escape text for use in element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
