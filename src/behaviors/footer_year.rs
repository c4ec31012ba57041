//! Copyright year in the footer.

#[cfg(test)]
#[path = "footer_year_test.rs"]
mod footer_year_test;

use crate::config::PageConfig;
use crate::dom::{DomElement, PageHost};

/// Write the current local year into the year slot, if the page has one.
///
/// Evaluated once at load; the text is not kept live.
pub fn write_current_year<H: PageHost>(host: &H, config: &PageConfig) -> Option<i32> {
    let slot = host.query(&config.selectors.year)?;
    let year = host.current_year();
    slot.set_text(&year.to_string());
    Some(year)
}
