//! Project grid filter.
//!
//! Buttons carry a category token in `data-filter`; cards carry a
//! space-separated set in `data-category`. Filtering only toggles inline
//! `display`, cards are never removed from the document.

#[cfg(test)]
#[path = "project_filter_test.rs"]
mod project_filter_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{DomElement, EventKind, PageEvent, PageHost};
use crate::state::filter::CategoryFilter;

const FILTER_ATTR: &str = "data-filter";
const CATEGORY_ATTR: &str = "data-category";

pub struct ProjectFilter<E: DomElement> {
    buttons: Vec<E>,
    cards: Vec<E>,
    active_class: String,
}

impl<E: DomElement> ProjectFilter<E> {
    /// Wire every filter button. Requires at least one button and one card.
    pub fn mount<H>(host: &H, config: &PageConfig) -> Option<Rc<Self>>
    where
        H: PageHost<Element = E>,
    {
        let buttons = host.query_all(&config.selectors.filter_button);
        let cards = host.query_all(&config.selectors.project_card);
        if buttons.is_empty() || cards.is_empty() {
            return None;
        }

        let this = Rc::new(Self { buttons, cards, active_class: config.classes.active.clone() });

        for (index, button) in this.buttons.iter().enumerate() {
            let handler = Rc::clone(&this);
            host.listen(
                button,
                EventKind::Click,
                Box::new(move |_: &PageEvent<E>| {
                    handler.select(index);
                }),
            );
        }

        Some(this)
    }

    /// Activate the button at `index` and filter the cards by its category.
    ///
    /// Returns the number of cards left visible, or `None` for an unknown button.
    pub fn select(&self, index: usize) -> Option<usize> {
        let button = self.buttons.get(index)?;
        let filter = CategoryFilter::parse(button.attribute(FILTER_ATTR).as_deref());

        for (i, other) in self.buttons.iter().enumerate() {
            other.set_class(&self.active_class, i == index);
        }

        let shown = self.apply(&filter);
        log::debug!("project filter '{}' shows {shown}/{} cards", filter.token(), self.cards.len());
        Some(shown)
    }

    /// Show cards matching `filter`, hide the rest. Returns the visible count.
    pub fn apply(&self, filter: &CategoryFilter) -> usize {
        let mut shown = 0;
        for card in &self.cards {
            let categories = card.attribute(CATEGORY_ATTR).unwrap_or_default();
            let matched = filter.matches(&categories);
            card.set_displayed(matched);
            if matched {
                shown += 1;
            }
        }
        shown
    }

    /// Filter of the currently active button, if any button is active.
    pub fn active_filter(&self) -> Option<CategoryFilter> {
        self.buttons
            .iter()
            .find(|b| b.has_class(&self.active_class))
            .map(|b| CategoryFilter::parse(b.attribute(FILTER_ATTR).as_deref()))
    }
}
