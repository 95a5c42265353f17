//! Host registration context.

use std::collections::BTreeMap;

use crate::config::{ConflictMode, HostConfig};
use crate::i18n::LocaleTable;
use crate::router::HostRouter;

/// Everything registration mutates: the live router, the live locale
/// table and the record of which modules are mounted.
///
/// There is no global instance. Hosts that share one across tasks wrap it
/// in their own lock; registration itself takes `&mut self`.
#[derive(Debug, Default)]
pub struct HostContext {
    pub(crate) router: HostRouter,
    pub(crate) locales: LocaleTable,
    pub(crate) modules: BTreeMap<String, String>,
    mode: ConflictMode,
}

impl HostContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &HostConfig) -> Self {
        Self::new().with_mode(config.conflict_mode)
    }

    pub fn with_mode(mut self, mode: ConflictMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn mode(&self) -> ConflictMode {
        self.mode
    }

    #[must_use]
    pub fn router(&self) -> &HostRouter {
        &self.router
    }

    /// Direct router access, for host-owned routes.
    pub fn router_mut(&mut self) -> &mut HostRouter {
        &mut self.router
    }

    #[must_use]
    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }

    /// Direct locale access, for host-owned namespaces.
    pub fn locales_mut(&mut self) -> &mut LocaleTable {
        &mut self.locales
    }

    /// True once `register` has accepted the module id, even if a strict
    /// conflict stopped it before any route was mounted.
    #[must_use]
    pub fn is_registered(&self, module_id: &str) -> bool {
        self.modules.contains_key(module_id)
    }

    #[must_use]
    pub fn module_version(&self, module_id: &str) -> Option<&str> {
        self.modules.get(module_id).map(String::as_str)
    }

    /// Registered `(id, version)` pairs, ordered by id.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules.iter().map(|(id, v)| (id.as_str(), v.as_str()))
    }
}
