//! Core type definitions for the leavedesk HR module.
//!
//! This crate defines the wire-level vocabulary shared by the transport,
//! the entity services and the state facades:
//! - Entity records (absence types, leave requests, allowances, calendar
//!   events, balances) and the envelopes the server wraps them in
//! - [`Paging`] and the per-entity list filters
//! - [`FieldMask`], the ordered field list sent with every partial update
//! - The date-only ↔ timestamp convention used at the API boundary
//!
//! Records are opaque payloads to the core: every field is optional so the
//! same type doubles as a partial record, and nothing here validates
//! business rules.

mod date;
mod field_mask;
mod filters;
mod paging;
mod records;
mod responses;

pub use date::{date_to_timestamp, from_timestamp, parse_date, to_timestamp};
pub use field_mask::FieldMask;
pub use filters::{
    AbsenceTypeFilter, AllowanceFilter, CalendarFilter, LeaveRequestFilter, UserFilter,
};
pub use paging::Paging;
pub use records::{
    AbsenceType, AdminUser, Audit, BalanceEntry, CalendarEvent, HealthStatus, HrStats,
    LeaveAllowance, LeaveRequest, LeaveRequestStatus,
};
pub use responses::{
    AbsenceTypeEnvelope, AllowanceEnvelope, ApproveBody, CalendarEventsResponse,
    LeaveRequestEnvelope, ListResponse, RejectBody, StatsEnvelope, UpdateBody,
    UserBalanceResponse,
};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("unknown leave request status: {0}")]
    UnknownStatus(String),
}
