//! Per-feature page behaviors.
//!
//! DESIGN
//! ======
//! Each behavior mounts from the elements it needs and returns `None` (or a
//! no-op outcome) when any of them is missing from the markup. Behaviors do
//! not know about each other; [`crate::page::PageBehaviors`] is the only
//! place they are assembled.

pub mod contact_form;
pub mod footer_year;
pub mod nav_menu;
pub mod project_filter;
pub mod reveal;
pub mod scroll_top;
pub mod theme;
