//! SDK for building leavedesk feature modules.
//!
//! A feature module hands the host exactly one artifact: a
//! [`ModuleDescriptor`]. It declares the module's identity and version, the
//! route subtrees it mounts, the named state facades presentation code can
//! look up, and one flat translation bundle per locale.
//!
//! # Example
//!
//! ```
//! use leavedesk_module_sdk::{LocaleBundle, ModuleDescriptor, RouteNode};
//!
//! let descriptor = ModuleDescriptor::builder("hr", "1.0.0")
//!     .route(
//!         RouteNode::new("/hr")
//!             .named("Hr")
//!             .meta("order", 2040)
//!             .child(RouteNode::new("calendar").named("HrCalendar")),
//!     )
//!     .locale("en-US", LocaleBundle::from_pairs([("menu.calendar", "Calendar")]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(descriptor.routes()[0].occupied_paths(), vec!["/hr", "/hr/calendar"]);
//! ```

mod descriptor;
mod error;
mod facade;
mod locale;
mod route;

pub use descriptor::{ModuleDescriptor, ModuleDescriptorBuilder};
pub use error::{DescriptorError, DescriptorResult};
pub use facade::StateFacade;
pub use locale::LocaleBundle;
pub use route::{RouteMeta, RouteNode, resolve_path};
