//! Errors surfaced by host capabilities and configuration loading.
//!
//! Nothing here is fatal to the page: callers log and fall back to the
//! behavior they would have without the failing capability.

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}
