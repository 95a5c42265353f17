//! Descriptor construction, validation and facade lookup.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leavedesk_module_sdk::{DescriptorError, LocaleBundle, ModuleDescriptor, RouteNode, StateFacade};
use pretty_assertions::assert_eq;

struct CounterFacade {
    name: &'static str,
    resets: AtomicUsize,
}

impl CounterFacade {
    fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            resets: AtomicUsize::new(0),
        })
    }
}

impl StateFacade for CounterFacade {
    fn name(&self) -> &str {
        self.name
    }

    fn reset(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct OtherFacade;

impl StateFacade for OtherFacade {
    fn name(&self) -> &str {
        "other"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn base() -> leavedesk_module_sdk::ModuleDescriptorBuilder {
    ModuleDescriptor::builder("hr", "1.0.0")
}

// ── Validation ───────────────────────────────────────────────────

#[test]
fn minimal_descriptor_builds() {
    let d = base().build().unwrap();
    assert_eq!(d.id(), "hr");
    assert_eq!(d.version(), "1.0.0");
    assert!(d.routes().is_empty());
    assert!(d.locales().is_empty());
}

#[test]
fn empty_id_is_rejected() {
    let err = ModuleDescriptor::builder("  ", "1.0.0").build().unwrap_err();
    assert!(matches!(err, DescriptorError::MissingId));
}

#[test]
fn non_semver_version_is_rejected() {
    let err = ModuleDescriptor::builder("hr", "v1").build().unwrap_err();
    assert!(matches!(err, DescriptorError::InvalidVersion(v) if v == "v1"));
}

#[test]
fn colliding_top_level_siblings_are_rejected() {
    let err = base()
        .route(RouteNode::new("/hr").named("A"))
        .route(RouteNode::new("/hr/").named("B"))
        .build()
        .unwrap_err();
    assert!(matches!(err, DescriptorError::SiblingCollision { path } if path == "/hr"));
}

#[test]
fn colliding_nested_siblings_are_rejected() {
    let err = base()
        .route(
            RouteNode::new("/hr")
                .child(RouteNode::new("calendar"))
                .child(RouteNode::new("/hr/calendar")),
        )
        .build()
        .unwrap_err();
    assert!(matches!(err, DescriptorError::SiblingCollision { path } if path == "/hr/calendar"));
}

#[test]
fn same_path_at_different_levels_is_allowed() {
    // A child may resolve to the same path as a node elsewhere in the tree
    // as long as they are not siblings.
    let d = base()
        .route(RouteNode::new("/hr").child(RouteNode::new("/reports")))
        .route(RouteNode::new("/reports"))
        .build();
    assert!(d.is_ok());
}

#[test]
fn child_named_like_its_ancestor_is_rejected() {
    let err = base()
        .route(
            RouteNode::new("/hr")
                .named("Hr")
                .child(RouteNode::new("a").named("A"))
                .child(RouteNode::new("b").named("Hr"))
                .child(RouteNode::new("c").named("C")),
        )
        .build()
        .unwrap_err();
    assert!(matches!(err, DescriptorError::DuplicateRouteName(name) if name == "Hr"));
}

#[test]
fn same_name_in_separate_subtrees_is_rejected() {
    let err = base()
        .route(RouteNode::new("/hr").child(RouteNode::new("settings").named("Settings")))
        .route(RouteNode::new("/admin").child(RouteNode::new("settings").named("Settings")))
        .build()
        .unwrap_err();
    assert!(matches!(err, DescriptorError::DuplicateRouteName(name) if name == "Settings"));
}

#[test]
fn unnamed_nodes_never_clash_on_name() {
    let d = base()
        .route(RouteNode::new("/hr").child(RouteNode::new("a")).child(RouteNode::new("b")))
        .route(RouteNode::new("/admin").child(RouteNode::new("a")))
        .build();
    assert!(d.is_ok());
}

#[test]
fn duplicate_facade_names_are_rejected() {
    let err = base()
        .facade(CounterFacade::new("hr-leave"))
        .facade(CounterFacade::new("hr-leave"))
        .build()
        .unwrap_err();
    assert!(matches!(err, DescriptorError::DuplicateFacade(n) if n == "hr-leave"));
}

// ── Facades ──────────────────────────────────────────────────────

#[test]
fn facade_lookup_by_name_and_type() {
    let d = base()
        .facade(CounterFacade::new("hr-leave"))
        .facade(Arc::new(OtherFacade))
        .build()
        .unwrap();

    assert_eq!(d.facade_names().collect::<Vec<_>>(), vec!["hr-leave", "other"]);
    assert!(d.facade("hr-leave").is_some());
    assert!(d.facade("missing").is_none());
    assert!(d.facade_as::<CounterFacade>("hr-leave").is_some());
    assert!(d.facade_as::<CounterFacade>("other").is_none());
}

#[test]
fn reset_facades_reaches_every_facade() {
    let leave = CounterFacade::new("hr-leave");
    let system = CounterFacade::new("hr-system");
    let d = base()
        .facade(leave.clone())
        .facade(system.clone())
        .build()
        .unwrap();

    d.reset_facades();
    d.reset_facades();
    assert_eq!(leave.resets.load(Ordering::SeqCst), 2);
    assert_eq!(system.resets.load(Ordering::SeqCst), 2);
}

// ── Locales ──────────────────────────────────────────────────────

#[test]
fn locale_json_is_flattened() {
    let d = base()
        .locale_json("en-US", r#"{"menu": {"moduleName": "HR"}}"#)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(d.locale("en-US").unwrap().get("menu.moduleName"), Some("HR"));
}

#[test]
fn later_locale_replaces_earlier_for_same_tag() {
    let d = base()
        .locale("en-US", LocaleBundle::from_pairs([("a", "1")]))
        .locale("en-US", LocaleBundle::from_pairs([("b", "2")]))
        .build()
        .unwrap();
    let bundle = d.locale("en-US").unwrap();
    assert_eq!(bundle.get("a"), None);
    assert_eq!(bundle.get("b"), Some("2"));
}

#[test]
fn debug_lists_facade_names_only() {
    let d = base().facade(CounterFacade::new("hr-leave")).build().unwrap();
    let rendered = format!("{d:?}");
    assert!(rendered.contains("hr-leave"));
    assert!(rendered.contains("\"hr\""));
}
