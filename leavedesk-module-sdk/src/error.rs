//! Error types for descriptor construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("module id is required")]
    MissingId,

    #[error("invalid module version '{0}': expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),

    #[error("sibling routes both resolve to '{path}'")]
    SiblingCollision { path: String },

    #[error("route name '{0}' is used more than once")]
    DuplicateRouteName(String),

    #[error("duplicate state facade name: {0}")]
    DuplicateFacade(String),

    #[error("invalid locale bundle for '{locale}': {reason}")]
    InvalidLocale { locale: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DescriptorResult<T> = Result<T, DescriptorError>;
