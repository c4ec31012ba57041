//! Composition root for the page behaviors.
//!
//! ARCHITECTURE
//! ============
//! `PageBehaviors::mount` is called once, after the document is interactive,
//! with the host passed in explicitly. It mounts every behavior whose markup
//! is present and keeps the resulting controllers so callers (and tests) can
//! see which features are live. The theme flag is applied separately by
//! [`apply_stored_theme`] because it should run before the document is ready.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::rc::Rc;

use crate::behaviors::contact_form::ContactForm;
use crate::behaviors::footer_year::write_current_year;
use crate::behaviors::nav_menu::NavMenu;
use crate::behaviors::project_filter::ProjectFilter;
use crate::behaviors::reveal::{RevealOutcome, mount_reveal};
use crate::behaviors::scroll_top::ScrollTop;
use crate::behaviors::theme::ThemeToggle;
use crate::config::PageConfig;
use crate::dom::PageHost;

pub use crate::behaviors::theme::apply_stored_theme;

pub struct PageBehaviors<H: PageHost> {
    pub theme: Option<Rc<ThemeToggle<H>>>,
    pub nav_menu: Option<Rc<NavMenu<H::Element>>>,
    pub year: Option<i32>,
    pub scroll_top: Option<Rc<ScrollTop<H>>>,
    pub reveal: RevealOutcome,
    pub project_filter: Option<Rc<ProjectFilter<H::Element>>>,
    pub contact_form: Option<Rc<ContactForm<H::Element>>>,
}

impl<H: PageHost> PageBehaviors<H> {
    /// Mount every behavior whose elements are present on the page.
    pub fn mount(host: &Rc<H>, config: &PageConfig) -> Self {
        let page: &H = host;
        let behaviors = Self {
            theme: ThemeToggle::mount(host, config),
            nav_menu: NavMenu::mount(page, config),
            year: write_current_year(page, config),
            scroll_top: ScrollTop::mount(host, config),
            reveal: mount_reveal(page, config),
            project_filter: ProjectFilter::mount(page, config),
            contact_form: ContactForm::mount(page, config),
        };
        log::info!("page behaviors mounted: {}", behaviors.active_features().join(", "));
        behaviors
    }

    /// Apply the stored theme and mount everything, for hosts that are
    /// already interactive.
    pub fn start(host: &Rc<H>, config: &PageConfig) -> Self {
        let page: &H = host;
        apply_stored_theme(page, config);
        Self::mount(host, config)
    }

    /// Names of the features that found their markup.
    pub fn active_features(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.theme.is_some() {
            out.push("theme");
        }
        if self.nav_menu.is_some() {
            out.push("nav-menu");
        }
        if self.year.is_some() {
            out.push("footer-year");
        }
        if self.scroll_top.is_some() {
            out.push("scroll-top");
        }
        if !matches!(self.reveal, RevealOutcome::RevealedImmediately(0)) {
            out.push("reveal");
        }
        if self.project_filter.is_some() {
            out.push("project-filter");
        }
        if self.contact_form.is_some() {
            out.push("contact-form");
        }
        out
    }
}
