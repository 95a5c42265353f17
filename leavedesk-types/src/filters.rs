//! List filters, one per entity family.
//!
//! Filters serialize to camelCase JSON objects which the transport flattens
//! into query pairs: `None` and empty strings are dropped, `Vec` fields
//! become repeated keys.

use serde::Serialize;

use crate::date::normalize_field;
use crate::LeaveRequestStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceTypeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<LeaveRequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl LeaveRequestFilter {
    /// Copy with date-only bounds widened to timestamps.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut filter = self.clone();
        normalize_field(&mut filter.start_date);
        normalize_field(&mut filter.end_date);
        filter
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absence_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_unit_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
}

impl CalendarFilter {
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut filter = self.clone();
        normalize_field(&mut filter.start_date);
        normalize_field(&mut filter.end_date);
        filter
    }
}

/// Filter for the admin-scoped user listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_unit_id: Option<u32>,
}
