//! State facades.
//!
//! One stateless facade per service, registered on the module descriptor
//! under a stable name. They translate the call shapes presentation code
//! uses (optional paging plus optional form values, or an id with a
//! partial record and the list of edited fields) into service calls.
//! Nothing is cached and errors come back unchanged.
//!
//! Every facade carries a [`RequestOptions`](leavedesk_client::RequestOptions)
//! applied to all of its calls; [`scoped`](HrLeaveStore::scoped) returns a
//! copy bound to other options, e.g. a cancellation token owned by a view.

mod absence_type;
mod allowance;
mod leave;
mod system;

pub use absence_type::HrAbsenceTypeStore;
pub use allowance::HrAllowanceStore;
pub use leave::HrLeaveStore;
pub use system::HrSystemStore;

use leavedesk_types::{FieldMask, Paging};

pub(crate) fn paging_or_default(paging: Option<&Paging>) -> Paging {
    paging.copied().unwrap_or_default()
}

pub(crate) fn mask_of(fields: &[&str]) -> FieldMask {
    fields.iter().copied().collect()
}
