pub mod id;

pub use id::{EmptyLeaveId, LeaveId};
