//! Host router primitives.

use leavedesk_module_host::HostRouter;
use leavedesk_module_sdk::RouteNode;
use pretty_assertions::assert_eq;

fn names(router: &HostRouter) -> Vec<String> {
    router
        .routes()
        .map(|r| r.name.clone().unwrap_or_else(|| format!("<{}>", r.path)))
        .collect()
}

fn tree() -> RouteNode {
    RouteNode::new("/hr")
        .named("Hr")
        .child(RouteNode::new("calendar").named("HrCalendar"))
        .child(RouteNode::new("request").named("HrRequests").child(RouteNode::new(":id")))
}

#[test]
fn add_route_indexes_whole_subtree() {
    let mut router = HostRouter::new();
    router.add_route(&tree(), Some("hr"));

    assert_eq!(names(&router), vec!["Hr", "HrCalendar", "HrRequests", "</hr/request/:id>"]);
    assert_eq!(router.route_by_name("HrCalendar").unwrap().path, "/hr/calendar");
    assert_eq!(router.resolve("/hr/request/:id").unwrap().name, None);
    assert!(router.routes().all(|r| r.is_owned_by("hr")));
}

#[test]
fn parent_links_follow_the_tree() {
    let mut router = HostRouter::new();
    let root = router.add_route(&tree(), None);
    let children: Vec<_> = router.children_of(root).map(|r| r.path.as_str()).collect();
    assert_eq!(children, vec!["/hr/calendar", "/hr/request"]);
}

#[test]
fn remove_route_drops_descendants() {
    let mut router = HostRouter::new();
    router.add_route(&tree(), None);
    router.add_route(&RouteNode::new("/home").named("Home"), None);

    let removed = router.remove_route("HrRequests").unwrap();
    assert_eq!(removed.path, "/hr/request");
    assert_eq!(names(&router), vec!["Hr", "HrCalendar", "Home"]);
    assert!(router.routes_at("/hr/request/:id").is_empty());

    router.remove_route("Hr");
    assert_eq!(names(&router), vec!["Home"]);
    assert!(router.remove_route("Hr").is_none());
}

#[test]
fn same_name_add_replaces_previous_route() {
    let mut router = HostRouter::new();
    router.add_route(&RouteNode::new("/old").named("Dup"), Some("a"));
    router.add_route(&RouteNode::new("/new").named("Dup"), Some("b"));

    assert_eq!(router.len(), 1);
    let route = router.route_by_name("Dup").unwrap();
    assert_eq!(route.path, "/new");
    assert!(route.is_owned_by("b"));
    assert!(router.resolve("/old").is_none());
}

#[test]
fn name_repeated_inside_one_subtree_leaves_no_orphans() {
    let mut router = HostRouter::new();
    let node = RouteNode::new("/hr")
        .named("Hr")
        .child(RouteNode::new("a").named("A"))
        .child(RouteNode::new("b").named("Hr").child(RouteNode::new("deep")))
        .child(RouteNode::new("c").named("C"));
    let root = router.add_route(&node, Some("hr"));

    assert_eq!(names(&router), vec!["Hr", "A", "C"]);
    assert_eq!(router.route_by_name("Hr").unwrap().id, root);
    assert!(
        router
            .routes()
            .filter_map(|r| r.parent)
            .all(|parent| router.routes().any(|r| r.id == parent))
    );
}

#[test]
fn subtree_replaces_live_names_from_any_depth() {
    let mut router = HostRouter::new();
    router.add_route(&RouteNode::new("/legacy").named("HrCalendar"), None);
    router.add_route(&tree(), Some("hr"));

    assert_eq!(names(&router), vec!["Hr", "HrCalendar", "HrRequests", "</hr/request/:id>"]);
    assert_eq!(router.route_by_name("HrCalendar").unwrap().path, "/hr/calendar");
}

#[test]
fn resolve_prefers_first_added_at_path() {
    let mut router = HostRouter::new();
    router.add_route(&RouteNode::new("/shared"), None);
    router.add_route(&RouteNode::new("/shared/").named("Later"), None);

    assert_eq!(router.routes_at("/shared").len(), 2);
    assert_eq!(router.resolve("shared").unwrap().name, None);
}

#[test]
fn add_child_route_mounts_under_named_parent() {
    let mut router = HostRouter::new();
    router.add_route(&RouteNode::new("/shell").named("Shell"), None);

    let id = router
        .add_child_route("Shell", &RouteNode::new("settings").named("Settings"), Some("hr"))
        .unwrap();
    let route = router.route_by_name("Settings").unwrap();
    assert_eq!(route.id, id);
    assert_eq!(route.path, "/shell/settings");
    assert!(router.add_child_route("Missing", &RouteNode::new("x"), None).is_none());
}

#[test]
fn remove_owned_by_counts_descendants() {
    let mut router = HostRouter::new();
    router.add_route(&tree(), Some("hr"));
    router.add_route(&RouteNode::new("/home").named("Home"), None);

    assert_eq!(router.remove_owned_by("hr"), 4);
    assert_eq!(names(&router), vec!["Home"]);
    assert_eq!(router.remove_owned_by("hr"), 0);
}

#[test]
fn metadata_is_carried_to_live_route() {
    let mut router = HostRouter::new();
    router.add_route(
        &RouteNode::new("/hr")
            .named("Hr")
            .redirect_to("/hr/calendar")
            .component("shell/app-layout")
            .meta("order", 2040),
        None,
    );
    let route = router.route_by_name("Hr").unwrap();
    assert_eq!(route.redirect.as_deref(), Some("/hr/calendar"));
    assert_eq!(route.component.as_deref(), Some("shell/app-layout"));
    assert_eq!(route.meta["order"], serde_json::json!(2040));
}
