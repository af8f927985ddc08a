//! Leave data model shared by storage, repositories and the store.

pub mod leave;
pub mod leave_request;

pub use leave::{Leave, LeaveStatus, LeaveType};
pub use leave_request::LeaveRequest;
