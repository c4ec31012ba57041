//! Pure page-scoped models.
//!
//! DESIGN
//! ======
//! Decisions that do not need the DOM (which theme a stored flag means,
//! whether a card matches a filter, whether a submission is valid) live here
//! so behaviors stay thin and these rules are testable on their own.

pub mod contact;
pub mod filter;
pub mod theme;
