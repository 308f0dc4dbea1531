// crates/wisata-core/src/error.rs

use thiserror::Error;

/// Errors surfaced by the enhancement layer.
///
/// Almost everything on the page degrades silently (a missing header simply
/// means no particles), so this enum is small: it covers caller mistakes
/// and configuration problems, not user-visible states such as "no search
/// results".
#[derive(Debug, Error)]
pub enum WisataError {
    /// `columnize` was asked for zero columns.
    #[error("column count must be at least 1 (got {0})")]
    InvalidColumnCount(usize),

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An element the caller required is absent from the page tree.
    #[error("element not found: {0}")]
    MissingElement(String),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WisataError {
    /// `true` for failures the page treats as "feature disabled" rather
    /// than as a fault worth reporting.
    pub fn is_soft(&self) -> bool {
        matches!(self, WisataError::MissingElement(_))
    }
}

pub type Result<T> = std::result::Result<T, WisataError>;
