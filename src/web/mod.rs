//! Browser entry point (feature `hydrate`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The static page loads the generated JS glue, which runs [`start`] as soon
//! as the module is instantiated. The stored theme is applied right away;
//! everything else waits for `DOMContentLoaded` so the markup it looks for
//! is guaranteed to exist.

mod host;

pub use host::WebPage;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::boot::{Boot, boot, config_from_blob};
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::dom::DomElement;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Fails only if a logger is already installed, which is fine.
    console_log::init_with_level(level).unwrap_or_default();

    let Some(page) = WebPage::from_global() else {
        log::warn!("no window/document, page behaviors disabled");
        return;
    };
    let page = Rc::new(page);
    let config = load_config(&page);
    let document = page.document().clone();

    if let Boot::Deferred(finish) = boot(page, config, &document.ready_state()) {
        let on_ready = Closure::once_into_js(move || {
            finish();
        });
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::warn!("DOMContentLoaded listener failed: {err:?}");
        }
    }
}

/// Read overrides from the inline JSON config element, if the page has one.
fn load_config(page: &WebPage) -> PageConfig {
    let blob = page.document().get_element_by_id(CONFIG_ELEMENT_ID).map(|el| el.text());
    config_from_blob(blob.as_deref())
}
