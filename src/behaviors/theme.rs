//! Light/dark theme toggle with a persisted preference.
//!
//! The stored flag is applied as early as possible (before the document is
//! ready) so the page does not flash the wrong theme. Storage is best-effort:
//! when it is unavailable the toggle still flips the page, the choice is just
//! not remembered across reloads.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{DomElement, EventKind, PageEvent, PageHost};
use crate::state::theme::Theme;

/// Apply the persisted theme flag to the theme root.
///
/// Returns the theme that was applied, or `None` when nothing usable is
/// stored (the page keeps its default dark styling).
pub fn apply_stored_theme<H: PageHost>(host: &H, config: &PageConfig) -> Option<Theme> {
    let root = host.theme_root()?;
    let stored = match host.read_preference(&config.storage_key) {
        Ok(stored) => stored?,
        Err(err) => {
            log::debug!("theme preference not readable: {err}");
            return None;
        }
    };
    let theme = Theme::from_stored(&stored)?;
    root.set_class(&config.classes.theme_light, theme.is_light());
    Some(theme)
}

pub struct ThemeToggle<H: PageHost> {
    host: Rc<H>,
    root: H::Element,
    light_class: String,
    storage_key: String,
}

impl<H: PageHost> ThemeToggle<H> {
    /// Wire the theme toggle control. Requires the control and a theme root.
    pub fn mount(host: &Rc<H>, config: &PageConfig) -> Option<Rc<Self>> {
        let control = host.query(&config.selectors.theme_toggle)?;
        let root = host.theme_root()?;

        let this = Rc::new(Self {
            host: Rc::clone(host),
            root,
            light_class: config.classes.theme_light.clone(),
            storage_key: config.storage_key.clone(),
        });

        let handler = Rc::clone(&this);
        host.listen(&control, EventKind::Click, Box::new(move |_: &PageEvent<H::Element>| handler.request_toggle()));
        Some(this)
    }

    /// Toggle inside a view transition when the host supports one.
    pub fn request_toggle(self: &Rc<Self>) {
        let this = Rc::clone(self);
        self.host.with_view_transition(Box::new(move || {
            this.toggle();
        }));
    }

    /// Flip the theme immediately and persist the result.
    pub fn toggle(&self) -> Theme {
        let theme = Theme::from_light_class(self.root.toggle_class(&self.light_class));
        if let Err(err) = self.host.write_preference(&self.storage_key, theme.as_str()) {
            log::debug!("theme preference not saved: {err}");
        }
        theme
    }

    pub fn current(&self) -> Theme {
        Theme::from_light_class(self.root.has_class(&self.light_class))
    }
}
