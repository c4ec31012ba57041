//! Startup sequencing for the browser entry point.
//!
//! The stored theme is applied the moment the module loads. Mounting the
//! behaviors waits for `DOMContentLoaded` while the document is still
//! `loading`. A script loaded from `<head>` may run before `<body>` exists, in
//! which case the theme is applied again once the document is ready.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::PageHost;
use crate::page::{PageBehaviors, apply_stored_theme};

/// `document.readyState` before the markup has been fully parsed.
pub const LOADING_STATE: &str = "loading";

/// Whether mounting has to wait for `DOMContentLoaded`.
pub fn defer_until_ready(ready_state: &str) -> bool {
    ready_state == LOADING_STATE
}

/// Page config from the inline JSON element's text, if the page has one.
///
/// A malformed blob is logged and replaced by the defaults.
pub fn config_from_blob(blob: Option<&str>) -> PageConfig {
    let Some(blob) = blob else {
        return PageConfig::default();
    };
    match PageConfig::from_json(blob) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using default page config");
            PageConfig::default()
        }
    }
}

pub enum Boot<H: PageHost> {
    /// The document was already interactive.
    Mounted(PageBehaviors<H>),
    /// Run this on `DOMContentLoaded`.
    Deferred(Box<dyn FnOnce() -> PageBehaviors<H>>),
}

/// Apply the stored theme now and mount now or later depending on
/// `ready_state`.
pub fn boot<H: PageHost>(host: Rc<H>, config: PageConfig, ready_state: &str) -> Boot<H> {
    let page: &H = &host;
    let root_missing = page.theme_root().is_none();
    if !root_missing {
        apply_stored_theme(page, &config);
    }

    if !defer_until_ready(ready_state) {
        return Boot::Mounted(PageBehaviors::mount(&host, &config));
    }

    Boot::Deferred(Box::new(move || {
        if root_missing {
            log::debug!("theme root appeared after load, applying stored theme");
            apply_stored_theme(&*host, &config);
        }
        PageBehaviors::mount(&host, &config)
    }))
}
