//! Declarative route trees.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DescriptorError;

/// Opaque per-route metadata (menu order, icon, title key, authority...).
pub type RouteMeta = BTreeMap<String, Value>;

/// One node of a module's route tree.
///
/// `path` is absolute when it starts with `/`, otherwise relative to the
/// parent's resolved path. Unnamed nodes are allowed but cannot be removed
/// by name from a host router.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteNode {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Reference to the view the shell should mount (e.g. `shell/app-layout`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: RouteMeta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }

    /// Absolute path of this node under `parent_path`.
    pub fn resolved_path(&self, parent_path: &str) -> String {
        resolve_path(parent_path, &self.path)
    }

    /// Every absolute path this subtree occupies when mounted at the root,
    /// in pre-order (the node itself first).
    pub fn occupied_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths("/", &mut paths);
        paths
    }

    fn collect_paths(&self, parent_path: &str, out: &mut Vec<String>) {
        let own = self.resolved_path(parent_path);
        out.push(own.clone());
        for child in &self.children {
            child.collect_paths(&own, out);
        }
    }

    /// Number of nodes in this subtree, including the node itself.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(RouteNode::subtree_len).sum::<usize>()
    }
}

/// Joins a route path onto its parent's resolved path.
///
/// Absolute paths are used as-is; relative ones are appended with a single
/// `/`. Empty segments are collapsed, so leading, trailing or doubled
/// slashes in either input never produce a doubled separator, and the
/// result never ends with `/` (except the root itself).
pub fn resolve_path(parent_path: &str, path: &str) -> String {
    let segments: Vec<&str> = if path.starts_with('/') {
        path.split('/').filter(|s| !s.is_empty()).collect()
    } else {
        parent_path
            .split('/')
            .chain(path.split('/'))
            .filter(|s| !s.is_empty())
            .collect()
    };
    format!("/{}", segments.join("/"))
}

/// Fails when two nodes at the same nesting level resolve to the same
/// absolute path.
pub(crate) fn check_siblings(nodes: &[RouteNode], parent_path: &str) -> Result<(), DescriptorError> {
    let mut seen = HashSet::new();
    for node in nodes {
        let resolved = node.resolved_path(parent_path);
        if !seen.insert(resolved.clone()) {
            return Err(DescriptorError::SiblingCollision { path: resolved });
        }
        check_siblings(&node.children, &resolved)?;
    }
    Ok(())
}

/// Fails when two nodes anywhere in the forest share a name.
pub(crate) fn check_names(nodes: &[RouteNode]) -> Result<(), DescriptorError> {
    fn walk<'a>(nodes: &'a [RouteNode], seen: &mut HashSet<&'a str>) -> Result<(), DescriptorError> {
        for node in nodes {
            if let Some(name) = node.name.as_deref() {
                if !seen.insert(name) {
                    return Err(DescriptorError::DuplicateRouteName(name.to_string()));
                }
            }
            walk(&node.children, seen)?;
        }
        Ok(())
    }
    walk(nodes, &mut HashSet::new())
}
