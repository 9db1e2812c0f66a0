//! Site header component

use leptos::prelude::*;
use siteheader_core::{nav_links, RootPath, SiteConfig};

use super::ThemeToggle;
use crate::browser::{self, MediaQueryProbe};

/// Header with logo, mobile menu toggle, section links, and optional theme toggle
#[component]
pub fn SiteHeader(
    site: SiteConfig,
    root: RootPath,
    /// Location path used to pick the active section
    #[prop(into)]
    path: String,
) -> impl IntoView {
    if site.theme_toggle {
        browser::theme_controller()
            .with_fallback(site.theme_fallback)
            .initialize(&MediaQueryProbe);
    }

    let show_theme_toggle = site.theme_toggle;
    let title = site.title;
    let (menu_open, set_menu_open) = signal(false);
    let home = root.resolve("index.html");
    let links = nav_links(&root, &path);

    view! {
        <header>
            <div class="container">
                <nav>
                    <div class="logo">
                        <a href=home style="color: inherit;">
                            <span style="color: var(--accent-color)">">"</span>
                            " "
                            {title}
                        </a>
                    </div>
                    <button
                        class="mobile-menu-btn"
                        aria-label="Toggle Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                    <div class="nav-links" class:active=move || menu_open.get()>
                        {links
                            .into_iter()
                            .map(|link| {
                                let class = link.class();
                                view! {
                                    <a href=link.href class=class>
                                        {link.section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        {show_theme_toggle.then(|| view! { <ThemeToggle/> })}
                    </div>
                </nav>
            </div>
        </header>
    }
}
