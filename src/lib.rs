//! # portfolio-behaviors
//!
//! WASM page behaviors for a static portfolio site. The markup is rendered
//! ahead of time; this crate attaches interactivity to it once the document
//! becomes interactive.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Composition root that mounts every behavior against a host |
//! | [`boot`] | Startup sequencing: early theme, deferred mount, config blob |
//! | [`dom`] | Host and element capabilities the behaviors are written against |
//! | [`behaviors`] | One controller per feature (theme, nav, filter, form, ...) |
//! | [`state`] | Pure models: theme flag, category filter, contact validation |
//! | [`config`] | Selectors, class names, thresholds, and user-facing copy |
//! | [`error`] | Shared error type |
//! | `web` | `web-sys` implementation of the host (feature `hydrate`) |

pub mod behaviors;
pub mod boot;
pub mod config;
pub mod dom;
pub mod error;
pub mod page;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
pub(crate) mod testing;
