//! The module descriptor and its builder.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{DescriptorError, DescriptorResult};
use crate::facade::StateFacade;
use crate::locale::LocaleBundle;
use crate::route::{RouteNode, check_names, check_siblings};

/// Everything a feature module contributes to the host.
///
/// Immutable once built; all validation happens in
/// [`ModuleDescriptorBuilder::build`].
#[derive(Clone)]
pub struct ModuleDescriptor {
    id: String,
    version: String,
    routes: Vec<RouteNode>,
    facades: BTreeMap<String, Arc<dyn StateFacade>>,
    locales: BTreeMap<String, LocaleBundle>,
}

impl ModuleDescriptor {
    pub fn builder(id: impl Into<String>, version: impl Into<String>) -> ModuleDescriptorBuilder {
        ModuleDescriptorBuilder {
            id: id.into(),
            version: version.into(),
            routes: Vec::new(),
            facades: Vec::new(),
            locales: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Top-level route subtrees, in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    #[must_use]
    pub fn locales(&self) -> &BTreeMap<String, LocaleBundle> {
        &self.locales
    }

    #[must_use]
    pub fn locale(&self, tag: &str) -> Option<&LocaleBundle> {
        self.locales.get(tag)
    }

    pub fn facade_names(&self) -> impl Iterator<Item = &str> {
        self.facades.keys().map(String::as_str)
    }

    #[must_use]
    pub fn facade(&self, name: &str) -> Option<&Arc<dyn StateFacade>> {
        self.facades.get(name)
    }

    /// Looks up a facade by name and downcasts it to its concrete type.
    pub fn facade_as<T: StateFacade>(&self, name: &str) -> Option<&T> {
        self.facades.get(name).and_then(|f| f.downcast_ref::<T>())
    }

    /// Calls [`StateFacade::reset`] on every facade.
    pub fn reset_facades(&self) {
        for facade in self.facades.values() {
            facade.reset();
        }
    }
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("id", &self.id)
            .field("version", &self.version)
            .field("routes", &self.routes)
            .field("facades", &self.facades.keys().collect::<Vec<_>>())
            .field("locales", &self.locales.keys().collect::<Vec<_>>())
            .finish()
    }
}

pub struct ModuleDescriptorBuilder {
    id: String,
    version: String,
    routes: Vec<RouteNode>,
    facades: Vec<Arc<dyn StateFacade>>,
    locales: BTreeMap<String, LocaleBundle>,
}

impl ModuleDescriptorBuilder {
    pub fn route(mut self, route: RouteNode) -> Self {
        self.routes.push(route);
        self
    }

    pub fn routes(mut self, routes: impl IntoIterator<Item = RouteNode>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// Registers a facade under its own [`StateFacade::name`].
    pub fn facade(mut self, facade: Arc<dyn StateFacade>) -> Self {
        self.facades.push(facade);
        self
    }

    /// Sets the bundle for `tag`, replacing any earlier one.
    pub fn locale(mut self, tag: impl Into<String>, bundle: LocaleBundle) -> Self {
        self.locales.insert(tag.into(), bundle);
        self
    }

    /// Parses a (possibly nested) JSON message document for `tag`.
    pub fn locale_json(self, tag: &str, json: &str) -> DescriptorResult<Self> {
        let bundle = LocaleBundle::from_json_str(tag, json)?;
        Ok(self.locale(tag, bundle))
    }

    pub fn build(self) -> DescriptorResult<ModuleDescriptor> {
        if self.id.trim().is_empty() {
            return Err(DescriptorError::MissingId);
        }
        if !is_semver(&self.version) {
            return Err(DescriptorError::InvalidVersion(self.version));
        }
        check_siblings(&self.routes, "/")?;
        check_names(&self.routes)?;

        let mut facades = BTreeMap::new();
        for facade in self.facades {
            let name = facade.name().to_string();
            if facades.contains_key(&name) {
                return Err(DescriptorError::DuplicateFacade(name));
            }
            facades.insert(name, facade);
        }

        for tag in self.locales.keys() {
            if tag.trim().is_empty() {
                return Err(DescriptorError::InvalidLocale {
                    locale: tag.clone(),
                    reason: "locale tag is empty".into(),
                });
            }
        }

        Ok(ModuleDescriptor {
            id: self.id,
            version: self.version,
            routes: self.routes,
            facades,
            locales: self.locales,
        })
    }
}

/// `MAJOR.MINOR.PATCH` with optional `-prerelease` and `+build` suffixes.
fn is_semver(version: &str) -> bool {
    let without_build = match version.split_once('+') {
        Some((core, build)) if !build.is_empty() => core,
        Some(_) => return false,
        None => version,
    };
    let core = match without_build.split_once('-') {
        Some((core, pre)) if !pre.is_empty() => core,
        Some(_) => return false,
        None => without_build,
    };
    let parts: Vec<&str> = core.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}
