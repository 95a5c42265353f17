//! The host's live route table.
//!
//! Routes are kept flat, keyed by a monotonically increasing id so that
//! iteration order is insertion order and a parent always precedes its
//! children. Names are unique; paths are not.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use leavedesk_module_sdk::{RouteMeta, RouteNode, resolve_path};
use tracing::{debug, warn};

pub type RouteId = u64;

/// A route as the host sees it after mounting.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredRoute {
    pub id: RouteId,
    pub name: Option<String>,
    /// Absolute, normalized path.
    pub path: String,
    pub parent: Option<RouteId>,
    /// Module that mounted the route; `None` for host-owned routes.
    pub owner: Option<String>,
    pub meta: RouteMeta,
    pub redirect: Option<String>,
    pub component: Option<String>,
}

impl RegisteredRoute {
    #[must_use]
    pub fn is_owned_by(&self, module_id: &str) -> bool {
        self.owner.as_deref() == Some(module_id)
    }

    /// Human-readable owner for log lines and errors.
    #[must_use]
    pub fn owner_label(&self) -> String {
        match &self.owner {
            Some(module) => format!("module '{module}'"),
            None => "the host".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct HostRouter {
    next_id: RouteId,
    routes: BTreeMap<RouteId, RegisteredRoute>,
    by_name: HashMap<String, RouteId>,
    by_path: HashMap<String, BTreeSet<RouteId>>,
}

impl HostRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `node` and its whole subtree at the root.
    ///
    /// A node whose name is already live replaces the previous route of
    /// that name (and its descendants), wherever it was mounted. A name
    /// repeated inside `node` itself keeps its first occurrence; the later
    /// node and its children are skipped.
    pub fn add_route(&mut self, node: &RouteNode, owner: Option<&str>) -> RouteId {
        self.replace_names_in(node);
        self.insert_subtree(node, "/", None, owner)
    }

    /// Mounts `node` beneath the live route called `parent_name`.
    /// Returns `None` when no such route exists.
    pub fn add_child_route(
        &mut self,
        parent_name: &str,
        node: &RouteNode,
        owner: Option<&str>,
    ) -> Option<RouteId> {
        let parent_id = *self.by_name.get(parent_name)?;
        self.replace_names_in(node);
        // The parent itself may have been named inside `node`.
        let parent_path = self.routes.get(&parent_id)?.path.clone();
        Some(self.insert_subtree(node, &parent_path, Some(parent_id), owner))
    }

    /// Unmounts every live route whose name appears anywhere in `node`.
    fn replace_names_in(&mut self, node: &RouteNode) {
        if let Some(name) = &node.name {
            if let Some(previous) = self.remove_route(name) {
                warn!(
                    "Route name '{}' already mounted at '{}' by {}; replacing it",
                    name,
                    previous.path,
                    previous.owner_label()
                );
            }
        }
        for child in &node.children {
            self.replace_names_in(child);
        }
    }

    fn insert_subtree(
        &mut self,
        node: &RouteNode,
        parent_path: &str,
        parent: Option<RouteId>,
        owner: Option<&str>,
    ) -> RouteId {
        let id = self.next_id;
        self.next_id += 1;
        let path = resolve_path(parent_path, &node.path);
        debug!("Mounting route {:?} at {}", node.name, path);

        if let Some(name) = &node.name {
            self.by_name.insert(name.clone(), id);
        }
        self.by_path.entry(path.clone()).or_default().insert(id);
        self.routes.insert(
            id,
            RegisteredRoute {
                id,
                name: node.name.clone(),
                path: path.clone(),
                parent,
                owner: owner.map(str::to_string),
                meta: node.meta.clone(),
                redirect: node.redirect.clone(),
                component: node.component.clone(),
            },
        );

        for child in &node.children {
            if let Some(name) = child.name.as_deref().filter(|n| self.by_name.contains_key(*n)) {
                warn!("Route name '{}' repeats within one subtree; skipping the later node", name);
                continue;
            }
            self.insert_subtree(child, &path, Some(id), owner);
        }
        id
    }

    /// Removes the named route together with all of its live descendants.
    /// Returns the removed route itself.
    pub fn remove_route(&mut self, name: &str) -> Option<RegisteredRoute> {
        let id = *self.by_name.get(name)?;
        self.remove_subtree(id)
    }

    /// Removes every route mounted by `module_id`. Returns how many routes
    /// were dropped, descendants included.
    pub fn remove_owned_by(&mut self, module_id: &str) -> usize {
        let before = self.routes.len();
        let roots: Vec<RouteId> = self
            .routes
            .values()
            .filter(|r| r.is_owned_by(module_id))
            .map(|r| r.id)
            .collect();
        for id in roots {
            self.remove_subtree(id);
        }
        before - self.routes.len()
    }

    fn remove_subtree(&mut self, root: RouteId) -> Option<RegisteredRoute> {
        if !self.routes.contains_key(&root) {
            return None;
        }
        // Children always carry larger ids than their parent, so one
        // forward pass collects the whole subtree.
        let mut doomed = BTreeSet::from([root]);
        for route in self.routes.range(root + 1..).map(|(_, r)| r) {
            if route.parent.is_some_and(|p| doomed.contains(&p)) {
                doomed.insert(route.id);
            }
        }

        let mut removed_root = None;
        for id in doomed {
            let Some(route) = self.routes.remove(&id) else {
                continue;
            };
            if let Some(name) = &route.name {
                if self.by_name.get(name) == Some(&id) {
                    self.by_name.remove(name);
                }
            }
            if let Some(ids) = self.by_path.get_mut(&route.path) {
                ids.remove(&id);
                if ids.is_empty() {
                    self.by_path.remove(&route.path);
                }
            }
            if id == root {
                removed_root = Some(route);
            }
        }
        removed_root
    }

    /// All live routes in insertion order.
    pub fn routes(&self) -> impl Iterator<Item = &RegisteredRoute> {
        self.routes.values()
    }

    #[must_use]
    pub fn route_by_name(&self, name: &str) -> Option<&RegisteredRoute> {
        self.by_name.get(name).and_then(|id| self.routes.get(id))
    }

    #[must_use]
    pub fn has_route(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Every live route mounted at exactly `path`, oldest first.
    pub fn routes_at(&self, path: &str) -> Vec<&RegisteredRoute> {
        let path = resolve_path("/", path);
        self.by_path
            .get(&path)
            .map(|ids| ids.iter().filter_map(|id| self.routes.get(id)).collect())
            .unwrap_or_default()
    }

    /// The route a navigation to `path` lands on: the first-added live
    /// route at that path.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&RegisteredRoute> {
        self.routes_at(path).into_iter().next()
    }

    /// Direct children of a route, in insertion order.
    pub fn children_of(&self, id: RouteId) -> impl Iterator<Item = &RegisteredRoute> {
        self.routes.values().filter(move |r| r.parent == Some(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
