//! Entity records as they cross the wire.
//!
//! Every field except the balance totals is optional: a record with only a
//! few fields set is how partial creates and updates are expressed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::date::normalize_field;

/// Tenant and audit metadata shared by all persisted records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u32>,
}

/// Lifecycle state of a leave request. Transitions are server policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveRequestStatus {
    #[default]
    #[serde(rename = "LEAVE_REQUEST_STATUS_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "LEAVE_REQUEST_STATUS_PENDING")]
    Pending,
    #[serde(rename = "LEAVE_REQUEST_STATUS_APPROVED")]
    Approved,
    #[serde(rename = "LEAVE_REQUEST_STATUS_REJECTED")]
    Rejected,
    #[serde(rename = "LEAVE_REQUEST_STATUS_CANCELLED")]
    Cancelled,
    #[serde(rename = "LEAVE_REQUEST_STATUS_AWAITING_SIGNING")]
    AwaitingSigning,
}

impl LeaveRequestStatus {
    /// Wire name of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "LEAVE_REQUEST_STATUS_UNSPECIFIED",
            Self::Pending => "LEAVE_REQUEST_STATUS_PENDING",
            Self::Approved => "LEAVE_REQUEST_STATUS_APPROVED",
            Self::Rejected => "LEAVE_REQUEST_STATUS_REJECTED",
            Self::Cancelled => "LEAVE_REQUEST_STATUS_CANCELLED",
            Self::AwaitingSigning => "LEAVE_REQUEST_STATUS_AWAITING_SIGNING",
        }
    }
}

impl std::str::FromStr for LeaveRequestStatus {
    type Err = crate::Error;

    /// Accepts the wire name or its short suffix, case-insensitively
    /// (`"pending"`, `"LEAVE_REQUEST_STATUS_PENDING"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let short = upper
            .strip_prefix("LEAVE_REQUEST_STATUS_")
            .unwrap_or(&upper);
        match short {
            "UNSPECIFIED" => Ok(Self::Unspecified),
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELLED" => Ok(Self::Cancelled),
            "AWAITING_SIGNING" => Ok(Self::AwaitingSigning),
            _ => Err(crate::Error::UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceType {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deducts_from_allowance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_approval: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_signing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeaveRequestStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_type_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_unit_name: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

impl LeaveRequest {
    /// Widens date-only `startDate`/`endDate` to midnight-UTC timestamps.
    pub fn normalize_dates(&mut self) {
        normalize_field(&mut self.start_date);
        normalize_field(&mut self.end_date);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveAllowance {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carried_over: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_type_name: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// One leave request projected onto the team calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeaveRequestStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_unit_name: Option<String>,
}

/// Per-absence-type balance of one user for one year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    pub absence_type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub total_days: f64,
    #[serde(default)]
    pub used_days: f64,
    #[serde(default)]
    pub carried_over: f64,
    #[serde(default)]
    pub remaining_days: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_requests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_requests_this_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_absence_types: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// User as returned by the shell's admin API.
///
/// Only the fields the HR views display are typed; everything else the
/// host sends is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
