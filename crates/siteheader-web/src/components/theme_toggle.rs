//! Light/dark theme toggle button

use leptos::prelude::*;
use siteheader_core::markup::{COFFEE_BEAN_PATH, COFFEE_FLOWER_PATH};

use crate::browser;

/// Toggle button with both icons inline; the stylesheet shows one per theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let toggle = move |_| {
        let theme = browser::theme_controller().toggle();
        tracing::debug!(theme = %theme, "Theme toggled");
    };

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            aria-label="Toggle theme"
            title="Toggle light/dark mode"
            on:click=toggle
        >
            <svg class="theme-icon" width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                <path class="coffee-bean" d=COFFEE_BEAN_PATH/>
                <path class="coffee-flower" d=COFFEE_FLOWER_PATH/>
            </svg>
        </button>
    }
}
