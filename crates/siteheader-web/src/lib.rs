//! siteheader-web - Browser header component for siteheader using Leptos
//!
//! Host pages load the wasm bundle and call `render_header(rootPath, site)`
//! once the `site-header` placeholder is in the document.

pub mod browser;
pub mod components;

pub use components::{SiteHeader, ThemeToggle};

use leptos::prelude::*;
use siteheader_core::{HeaderError, RootPath, SiteConfig};
use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    // Handle for the currently mounted header; dropping it unmounts
    static MOUNTED: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
}

/// Render the header for a built-in site preset into its placeholder.
///
/// Calling again replaces the previous header and its handlers. A missing
/// placeholder is a page-authoring bug and is returned as a JS error.
#[wasm_bindgen]
pub fn render_header(root_path: &str, site: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let site = SiteConfig::preset(site).map_err(to_js)?;
    let root = RootPath::new(root_path).map_err(to_js)?;
    mount_header(site, root).map_err(to_js)
}

/// Mount `SiteHeader` into the site's placeholder element
pub fn mount_header(site: SiteConfig, root: RootPath) -> Result<(), HeaderError> {
    let placeholder =
        browser::element_by_id(&site.placeholder_id).ok_or_else(|| HeaderError::PlaceholderMissing {
            id: site.placeholder_id.clone(),
        })?;
    let path = browser::current_path();

    MOUNTED.with(|mounted| {
        mounted.borrow_mut().take();
        placeholder.set_inner_html("");
        let handle = leptos::mount::mount_to(placeholder, move || {
            view! { <SiteHeader site root path/> }
        });
        *mounted.borrow_mut() = Some(Box::new(handle));
    });

    Ok(())
}

fn to_js(err: HeaderError) -> JsValue {
    let message = match err.suggestion() {
        Some(hint) => format!("{} ({})", err, hint),
        None => err.to_string(),
    };
    JsValue::from_str(&message)
}
