//! Host side of the module registration protocol.
//!
//! A [`HostContext`] owns the live route table and locale table of one
//! shell instance. Feature modules are merged into it with [`register`],
//! which replaces any named routes the module's subtrees would collide
//! with and swaps in the module's translation namespace wholesale.

mod config;
mod context;
mod error;
mod i18n;
mod register;
mod router;

pub use config::{ConflictMode, HostConfig};
pub use context::HostContext;
pub use error::{RegistrationError, RegistrationResult};
pub use i18n::LocaleTable;
pub use register::{register, unregister};
pub use router::{HostRouter, RegisteredRoute, RouteId};
