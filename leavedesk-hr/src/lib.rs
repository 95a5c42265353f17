//! HR leave-management feature module.
//!
//! [`hr_module`] assembles the module descriptor the host registers: the
//! `/hr` route tree, the four state facades and the en-US translations.
//! The entity services under [`service`] can also be used on their own,
//! e.g. from the command line.

pub mod routes;
pub mod service;
pub mod store;

use std::sync::Arc;

use leavedesk_client::Transport;
use leavedesk_module_sdk::{DescriptorResult, ModuleDescriptor};

pub use store::{HrAbsenceTypeStore, HrAllowanceStore, HrLeaveStore, HrSystemStore};

pub const MODULE_ID: &str = "hr";
pub const MODULE_VERSION: &str = "1.0.0";

const EN_US: &str = include_str!("../locales/en-US.json");

/// Builds the HR module descriptor with every facade bound to `transport`.
pub fn hr_module(transport: Arc<dyn Transport>) -> DescriptorResult<ModuleDescriptor> {
    ModuleDescriptor::builder(MODULE_ID, MODULE_VERSION)
        .routes(routes::routes())
        .facade(Arc::new(HrAbsenceTypeStore::new(transport.clone())))
        .facade(Arc::new(HrLeaveStore::new(transport.clone())))
        .facade(Arc::new(HrAllowanceStore::new(transport.clone())))
        .facade(Arc::new(HrSystemStore::new(transport)))
        .locale_json("en-US", EN_US)?
        .build()
}
