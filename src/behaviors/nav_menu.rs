//! Mobile navigation menu.
//!
//! The open state lives in the DOM: the `open` class on the toggle is the
//! source of truth and is mirrored onto the menu container and the toggle's
//! `aria-expanded` attribute on every change.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{DomElement, EventKind, PageEvent, PageHost};

const ARIA_EXPANDED: &str = "aria-expanded";

pub struct NavMenu<E: DomElement> {
    toggle: E,
    menu: E,
    open_class: String,
    link_selector: String,
}

impl<E: DomElement> NavMenu<E> {
    /// Wire the menu. Requires both the toggle control and the container.
    pub fn mount<H>(host: &H, config: &PageConfig) -> Option<Rc<Self>>
    where
        H: PageHost<Element = E>,
    {
        let toggle = host.query(&config.selectors.nav_toggle)?;
        let menu = host.query(&config.selectors.site_nav)?;

        let this = Rc::new(Self {
            toggle: toggle.clone(),
            menu: menu.clone(),
            open_class: config.classes.open.clone(),
            link_selector: config.selectors.nav_link.clone(),
        });

        let on_toggle = Rc::clone(&this);
        host.listen(
            &toggle,
            EventKind::Click,
            Box::new(move |_: &PageEvent<E>| {
                on_toggle.toggle();
            }),
        );

        // Delegated: one listener on the container covers every link.
        let on_menu = Rc::clone(&this);
        host.listen(
            &menu,
            EventKind::Click,
            Box::new(move |event: &PageEvent<E>| {
                on_menu.handle_menu_click(event.target());
            }),
        );

        Some(this)
    }

    /// Flip the menu and return whether it is now open.
    pub fn toggle(&self) -> bool {
        let open = self.toggle.toggle_class(&self.open_class);
        self.menu.set_class(&self.open_class, open);
        self.toggle.set_attribute(ARIA_EXPANDED, if open { "true" } else { "false" });
        open
    }

    /// Force the menu closed, whatever its current state.
    pub fn close(&self) {
        self.toggle.remove_class(&self.open_class);
        self.menu.remove_class(&self.open_class);
        self.toggle.set_attribute(ARIA_EXPANDED, "false");
    }

    /// Close the menu if `target` is a navigation link. Returns whether it did.
    pub fn handle_menu_click(&self, target: Option<&E>) -> bool {
        if target.is_some_and(|el| el.matches(&self.link_selector)) {
            self.close();
            true
        } else {
            false
        }
    }

    pub fn is_open(&self) -> bool {
        self.toggle.has_class(&self.open_class)
    }
}
