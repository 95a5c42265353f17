//! Route tree path resolution and occupancy.

use leavedesk_module_sdk::{RouteNode, resolve_path};
use proptest::prelude::*;

// ── resolve_path ─────────────────────────────────────────────────

#[test]
fn relative_child_joins_with_single_separator() {
    assert_eq!(resolve_path("/hr", "calendar"), "/hr/calendar");
    assert_eq!(resolve_path("/hr/", "calendar"), "/hr/calendar");
    assert_eq!(resolve_path("/hr", "calendar/"), "/hr/calendar");
}

#[test]
fn absolute_child_ignores_parent() {
    assert_eq!(resolve_path("/hr", "/reports"), "/reports");
}

#[test]
fn root_parent_does_not_double_slash() {
    assert_eq!(resolve_path("/", "hr"), "/hr");
    assert_eq!(resolve_path("/", "/"), "/");
}

#[test]
fn empty_child_resolves_to_parent() {
    assert_eq!(resolve_path("/hr", ""), "/hr");
}

#[test]
fn doubled_slashes_collapse() {
    assert_eq!(resolve_path("//hr//", "//x"), "/x");
    assert_eq!(resolve_path("/hr//a", "b//c"), "/hr/a/b/c");
}

// ── occupied_paths ───────────────────────────────────────────────

fn hr_tree() -> RouteNode {
    RouteNode::new("/hr")
        .named("Hr")
        .redirect_to("/hr/calendar")
        .child(RouteNode::new("calendar").named("HrCalendar"))
        .child(
            RouteNode::new("request")
                .named("HrRequests")
                .child(RouteNode::new("detail/:id").named("HrRequestDetail")),
        )
        .child(RouteNode::new("/hr-legacy"))
}

#[test]
fn occupied_paths_cover_all_descendants_in_preorder() {
    assert_eq!(
        hr_tree().occupied_paths(),
        vec![
            "/hr",
            "/hr/calendar",
            "/hr/request",
            "/hr/request/detail/:id",
            "/hr-legacy",
        ]
    );
}

#[test]
fn subtree_len_counts_every_node() {
    assert_eq!(hr_tree().subtree_len(), 5);
    assert_eq!(RouteNode::new("/x").subtree_len(), 1);
}

#[test]
fn builder_sets_meta_and_component() {
    let node = RouteNode::new("/hr")
        .component("shell/app-layout")
        .meta("order", 2040)
        .meta("keepAlive", true);
    assert_eq!(node.component.as_deref(), Some("shell/app-layout"));
    assert_eq!(node.meta["order"], 2040);
    assert_eq!(node.meta["keepAlive"], true);
}

#[test]
fn route_node_serializes_without_empty_fields() {
    let json = serde_json::to_value(RouteNode::new("calendar").named("HrCalendar")).unwrap();
    assert_eq!(json, serde_json::json!({ "path": "calendar", "name": "HrCalendar" }));
}

// ── Properties ───────────────────────────────────────────────────

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}"
}

proptest! {
    #[test]
    fn joined_path_never_has_doubled_or_trailing_separator(
        parent in prop::collection::vec(segment(), 0..4),
        child in prop::collection::vec(segment(), 1..4),
        parent_trailing in any::<bool>(),
    ) {
        let mut parent_path = format!("/{}", parent.join("/"));
        if parent_trailing {
            parent_path.push('/');
        }
        let resolved = resolve_path(&parent_path, &child.join("/"));

        prop_assert!(!resolved.contains("//"));
        prop_assert!(!resolved.ends_with('/'));
        prop_assert!(resolved.starts_with('/'));

        let mut expected: Vec<String> = parent.clone();
        expected.extend(child.clone());
        prop_assert_eq!(resolved, format!("/{}", expected.join("/")));
    }
}
