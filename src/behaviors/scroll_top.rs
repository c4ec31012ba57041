//! Floating "back to top" control.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{DomElement, EventKind, PageEvent, PageHost};

/// Whether the control should be shown at `offset`. The threshold itself hides.
pub fn should_show(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub struct ScrollTop<H: PageHost> {
    host: Rc<H>,
    control: H::Element,
    visible_class: String,
    threshold: f64,
}

impl<H: PageHost> ScrollTop<H> {
    /// Wire the control to window scroll and to its own click.
    pub fn mount(host: &Rc<H>, config: &PageConfig) -> Option<Rc<Self>> {
        let control = host.query(&config.selectors.scroll_top)?;

        let this = Rc::new(Self {
            host: Rc::clone(host),
            control: control.clone(),
            visible_class: config.classes.visible.clone(),
            threshold: config.scroll_top_threshold,
        });

        // Recomputed on every scroll event, unthrottled.
        let on_scroll = Rc::clone(&this);
        host.listen_scroll(Box::new(move |offset: f64| {
            on_scroll.sync(offset);
        }));

        let on_click = Rc::clone(&this);
        host.listen(&control, EventKind::Click, Box::new(move |_: &PageEvent<H::Element>| on_click.scroll_to_top()));

        Some(this)
    }

    /// Show or hide the control for `offset`; returns whether it is visible.
    pub fn sync(&self, offset: f64) -> bool {
        let show = should_show(offset, self.threshold);
        self.control.set_class(&self.visible_class, show);
        show
    }

    pub fn scroll_to_top(&self) {
        self.host.scroll_to_top();
    }

    pub fn is_visible(&self) -> bool {
        self.control.has_class(&self.visible_class)
    }
}
