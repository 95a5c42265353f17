//! Merging module descriptors into a host context.

use std::collections::HashSet;

use leavedesk_module_sdk::ModuleDescriptor;
use tracing::{debug, info, warn};

use crate::config::ConflictMode;
use crate::context::HostContext;
use crate::error::{RegistrationError, RegistrationResult};

/// Registers `descriptor` into `ctx`.
///
/// Each top-level route subtree is handled on its own: every named live
/// route sitting on a path the subtree occupies is removed (with its
/// descendants), then the subtree is mounted. Unnamed live routes are left
/// alone. Afterwards each locale bundle replaces the module's namespace
/// under its tag.
///
/// Not transactional: when [`ConflictMode::Strict`] rejects subtree `n`,
/// subtrees before it stay mounted and the module stays recorded. No
/// locales are merged in that case.
pub fn register(ctx: &mut HostContext, descriptor: &ModuleDescriptor) -> RegistrationResult<()> {
    let module_id = descriptor.id();
    info!(
        "Registering module '{}' v{} ({} route trees, {} locales)",
        module_id,
        descriptor.version(),
        descriptor.routes().len(),
        descriptor.locales().len()
    );

    // Recorded up front so a partially applied registration can still be
    // unregistered.
    ctx.modules
        .insert(module_id.to_string(), descriptor.version().to_string());

    for node in descriptor.routes() {
        let occupied: HashSet<String> = node.occupied_paths().into_iter().collect();
        let colliding: Vec<_> = ctx
            .router
            .routes()
            .filter(|r| r.name.is_some() && occupied.contains(&r.path))
            .cloned()
            .collect();

        if ctx.mode() == ConflictMode::Strict {
            if let Some(foreign) = colliding.iter().find(|r| !r.is_owned_by(module_id)) {
                return Err(RegistrationError::Conflict {
                    path: foreign.path.clone(),
                    existing: foreign.name.clone().unwrap_or_default(),
                    owner: foreign.owner_label(),
                    module: module_id.to_string(),
                });
            }
        }

        for route in colliding {
            let Some(name) = route.name.as_deref() else {
                continue;
            };
            // May already be gone as a descendant of an earlier removal.
            if ctx.router.remove_route(name).is_none() {
                continue;
            }
            if route.is_owned_by(module_id) {
                debug!("Replacing route '{}' at {} from earlier registration", name, route.path);
            } else {
                warn!(
                    "Module '{}' replaces route '{}' at {} owned by {}",
                    module_id,
                    name,
                    route.path,
                    route.owner_label()
                );
            }
        }

        ctx.router.add_route(node, Some(module_id));
    }

    for (tag, bundle) in descriptor.locales() {
        debug!("Merging {} messages into {}/{}", bundle.len(), tag, module_id);
        ctx.locales.merge(tag, module_id, bundle.clone());
    }

    Ok(())
}

/// Removes every route owned by `module_id` and its locale namespace.
/// Returns `false` when the module was never registered.
pub fn unregister(ctx: &mut HostContext, module_id: &str) -> bool {
    if ctx.modules.remove(module_id).is_none() {
        return false;
    }
    let routes = ctx.router.remove_owned_by(module_id);
    let locales = ctx.locales.remove_namespace(module_id);
    info!(
        "Unregistered module '{}' ({} routes, {} locales)",
        module_id, routes, locales
    );
    true
}
