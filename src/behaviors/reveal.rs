//! Reveal-on-scroll.
//!
//! Reveal elements start hidden (page CSS keys off the missing `visible`
//! class). Each one is revealed the first time enough of it enters the
//! viewport and is then dropped from observation, so it never hides again.
//! Without an intersection observer everything is revealed up front.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{DomElement, IntersectionHandler, ObserverAction, PageHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// This many elements are waiting to scroll into view.
    Observing(usize),
    /// No observer (or nothing to observe); this many were revealed at once.
    RevealedImmediately(usize),
}

pub fn mount_reveal<H: PageHost>(host: &H, config: &PageConfig) -> RevealOutcome {
    let targets = host.query_all(&config.selectors.reveal);
    let visible = config.classes.visible.clone();

    if !targets.is_empty() {
        let class = visible.clone();
        let handler: IntersectionHandler<H::Element> =
            Rc::new(move |el: &H::Element, intersecting: bool| reveal_on_enter(el, intersecting, &class));
        if host.observe_intersections(&targets, config.reveal_threshold, handler) {
            return RevealOutcome::Observing(targets.len());
        }
        log::debug!("intersection observer unavailable, revealing {} elements", targets.len());
    }

    for target in &targets {
        target.add_class(&visible);
    }
    RevealOutcome::RevealedImmediately(targets.len())
}

/// Intersection callback: reveal once, then stop watching.
pub fn reveal_on_enter<E: DomElement>(el: &E, intersecting: bool, visible_class: &str) -> ObserverAction {
    if !intersecting {
        return ObserverAction::Keep;
    }
    el.add_class(visible_class);
    ObserverAction::Unobserve
}
