//! Error types for module registration.

use leavedesk_module_sdk::DescriptorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Strict mode only: a named route owned by someone else sits on a
    /// path the incoming module wants.
    #[error("route conflict at '{path}': '{existing}' is owned by {owner}, cannot register module '{module}'")]
    Conflict {
        path: String,
        existing: String,
        owner: String,
        module: String,
    },

    #[error("invalid module descriptor: {0}")]
    InvalidDescriptor(#[from] DescriptorError),

    #[error("host configuration error: {0}")]
    Config(String),
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;
