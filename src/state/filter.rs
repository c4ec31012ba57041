//! Project category filter.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

pub const ALL_TOKEN: &str = "all";

/// Category selected by a filter button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Interpret a button's `data-filter` value. Missing or empty means `All`.
    ///
    /// Any other value, whitespace included, is taken literally, so a
    /// whitespace-only label matches no card.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("" | ALL_TOKEN) => Self::All,
            Some(token) => Self::Category(token.to_owned()),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Self::All => ALL_TOKEN,
            Self::Category(token) => token,
        }
    }

    /// Whether a card with the whitespace-separated `categories` is shown.
    ///
    /// Matching is by exact token: `web` does not match `webgl`.
    pub fn matches(&self, categories: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(token) => categories.split_whitespace().any(|c| c == token),
        }
    }
}
