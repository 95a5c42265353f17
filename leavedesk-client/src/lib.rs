//! Transport layer for leavedesk modules.
//!
//! Every entity call is described by an [`ApiRequest`] (method, base scope,
//! path, query pairs, JSON body) and executed by a [`Transport`]. The
//! production transport, [`HttpTransport`], sends it with `reqwest` to
//! either the module-scoped or the admin-scoped base path, attaching
//! `Content-Type: application/json` and a bearer token from a
//! [`TokenSource`].
//!
//! Non-2xx responses surface as [`ClientError::Transport`] carrying the
//! status; the response body is never parsed. Calls can be cancelled
//! through the [`CancellationToken`] in [`RequestOptions`]. Nothing here
//! retries.

mod config;
mod error;
mod query;
mod request;
mod token;
mod transport;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use query::to_query_pairs;
pub use request::{ApiRequest, BaseScope, Method, RequestOptions};
pub use token::{NoAuth, SharedToken, StaticToken, TokenSource};
pub use tokio_util::sync::CancellationToken;
pub use transport::{HttpTransport, Transport, decode};
