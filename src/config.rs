//! Page contract: selectors, class names, thresholds, and copy.
//!
//! DESIGN
//! ======
//! Every string the behaviors look for in the markup lives here so a page can
//! rename hooks without touching controller code. All structs deserialize
//! with `#[serde(default)]`, so an override blob only needs the keys it
//! changes. The defaults describe the portfolio markup as shipped.

use serde::Deserialize;

use crate::error::PageError;

pub const DEFAULT_STORAGE_KEY: &str = "portfolio-theme";
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 420.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;
pub const DEFAULT_MESSAGE_MIN_CHARS: usize = 10;

/// Id of the inline `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "page-behaviors-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    /// `localStorage` key for the persisted theme flag.
    pub storage_key: String,
    /// Scroll offset (CSS px) the scroll-top control must exceed to show.
    pub scroll_top_threshold: f64,
    /// Fraction of a reveal element that must be in view to reveal it.
    pub reveal_threshold: f64,
    /// Minimum trimmed length of the contact message, in characters.
    pub message_min_chars: usize,
    pub messages: FormMessages,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            message_min_chars: DEFAULT_MESSAGE_MIN_CHARS,
            messages: FormMessages::default(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }
}

/// CSS selectors locating each feature's elements.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub nav_toggle: String,
    pub site_nav: String,
    pub nav_link: String,
    pub year: String,
    pub scroll_top: String,
    pub reveal: String,
    pub filter_button: String,
    pub project_card: String,
    pub contact_form: String,
    pub field_error: String,
    pub form_feedback: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "#themeToggle".to_owned(),
            nav_toggle: ".nav-toggle".to_owned(),
            site_nav: ".site-nav".to_owned(),
            nav_link: ".nav-link".to_owned(),
            year: "#year".to_owned(),
            scroll_top: ".scroll-top".to_owned(),
            reveal: ".reveal".to_owned(),
            filter_button: ".filter-button".to_owned(),
            project_card: ".project-card".to_owned(),
            contact_form: "#contactForm".to_owned(),
            field_error: ".field-error".to_owned(),
            form_feedback: ".form-feedback".to_owned(),
        }
    }
}

/// Class names toggled by the behaviors. Styling for them lives in the page CSS.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub theme_light: String,
    pub open: String,
    pub visible: String,
    pub active: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            theme_light: "theme-light".to_owned(),
            open: "open".to_owned(),
            visible: "visible".to_owned(),
            active: "active".to_owned(),
        }
    }
}

/// User-facing copy for the contact form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormMessages {
    pub name_required: String,
    pub email_required: String,
    pub email_invalid: String,
    pub message_too_short: String,
    pub form_has_errors: String,
    pub submitted: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            name_required: "Please tell me your name.".to_owned(),
            email_required: "Please tell me your email.".to_owned(),
            email_invalid: "That email doesn't look valid.".to_owned(),
            message_too_short: "Tell me a bit more about your project (at least 10 characters).".to_owned(),
            form_has_errors: "The form contains errors.".to_owned(),
            submitted: "Thanks for your message! This form is a demo with no backend, so feel free to email me directly."
                .to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
