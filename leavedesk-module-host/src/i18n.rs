//! The host's live translation table: locale tag → namespace → bundle.

use std::collections::BTreeMap;

use leavedesk_module_sdk::LocaleBundle;

#[derive(Debug, Default, Clone)]
pub struct LocaleTable {
    locales: BTreeMap<String, BTreeMap<String, LocaleBundle>>,
}

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `bundle` as the complete content of `namespace` under `tag`.
    /// Keys from any previous bundle in that namespace do not survive.
    pub fn merge(&mut self, tag: &str, namespace: &str, bundle: LocaleBundle) {
        self.locales
            .entry(tag.to_string())
            .or_default()
            .insert(namespace.to_string(), bundle);
    }

    /// Drops `namespace` from every locale. Returns the number of locales
    /// it was removed from.
    pub fn remove_namespace(&mut self, namespace: &str) -> usize {
        let mut removed = 0;
        for namespaces in self.locales.values_mut() {
            if namespaces.remove(namespace).is_some() {
                removed += 1;
            }
        }
        self.locales.retain(|_, namespaces| !namespaces.is_empty());
        removed
    }

    #[must_use]
    pub fn namespace(&self, tag: &str, namespace: &str) -> Option<&LocaleBundle> {
        self.locales.get(tag)?.get(namespace)
    }

    /// Looks up a fully-qualified key such as `hr.menu.calendar`, where the
    /// first segment names the namespace.
    #[must_use]
    pub fn translate(&self, tag: &str, key: &str) -> Option<&str> {
        let (namespace, rest) = key.split_once('.')?;
        self.namespace(tag, namespace)?.get(rest)
    }

    pub fn translate_with_fallback(&self, tag: &str, fallback: &str, key: &str) -> Option<&str> {
        self.translate(tag, key)
            .or_else(|| self.translate(fallback, key))
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn namespaces(&self, tag: &str) -> impl Iterator<Item = &str> {
        self.locales
            .get(tag)
            .into_iter()
            .flat_map(|namespaces| namespaces.keys().map(String::as_str))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
