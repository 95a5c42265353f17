//! The module's route tree.

use leavedesk_module_sdk::RouteNode;
use serde_json::json;

/// Roles allowed to see the HR section.
pub const AUTHORITY: [&str; 2] = ["platform:admin", "tenant:manager"];

/// Menu position of the HR section in the shell sidebar.
pub const MENU_ORDER: u32 = 2040;

fn page(path: &str, name: &str, icon: &str, title: &str, component: &str) -> RouteNode {
    RouteNode::new(path)
        .named(name)
        .component(component)
        .meta("icon", icon)
        .meta("title", title)
        .meta("authority", json!(AUTHORITY))
}

/// `/hr` with the calendar, request and absence-type pages beneath it.
pub fn routes() -> Vec<RouteNode> {
    vec![
        RouteNode::new("/hr")
            .named("Hr")
            .component("shell/app-layout")
            .redirect_to("/hr/calendar")
            .meta("order", MENU_ORDER)
            .meta("icon", "lucide:calendar-days")
            .meta("title", "hr.menu.moduleName")
            .meta("keepAlive", true)
            .meta("authority", json!(AUTHORITY))
            .child(page(
                "calendar",
                "HrCalendar",
                "lucide:calendar",
                "hr.menu.calendar",
                "views/calendar",
            ))
            .child(page(
                "request",
                "HrRequests",
                "lucide:clock",
                "hr.menu.requests",
                "views/request",
            ))
            .child(page(
                "absence-type",
                "HrAbsenceTypes",
                "lucide:list",
                "hr.menu.absenceTypes",
                "views/absence-type",
            )),
    ]
}
