//! Request bodies and response envelopes.

use serde::{Deserialize, Serialize};

use crate::{AbsenceType, BalanceEntry, CalendarEvent, HrStats, LeaveAllowance, LeaveRequest};

/// Paged list response: one page of `items` plus the server-side `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceTypeEnvelope {
    pub absence_type: AbsenceType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestEnvelope {
    pub leave_request: LeaveRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceEnvelope {
    pub allowance: LeaveAllowance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsEnvelope {
    #[serde(default)]
    pub stats: HrStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEventsResponse {
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBalanceResponse {
    pub user_id: u32,
    pub year: i32,
    #[serde(default)]
    pub entries: Vec<BalanceEntry>,
}

/// Body of every `PUT /{collection}/{id}`: the partial record plus the
/// comma-joined field mask.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBody<'a, T> {
    pub id: &'a str,
    pub data: &'a T,
    pub update_mask: String,
}

/// Optional annotations sent with an approval.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
}
