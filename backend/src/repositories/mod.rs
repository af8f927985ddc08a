pub mod latency;
pub mod leave_index;
pub mod leave_repository;

pub use latency::Latency;
pub use leave_index::LeaveIndex;
pub use leave_repository::{LeaveRepository, LeaveRepositoryTrait};

// MockLeaveRepositoryTrait is only available in test builds via #[cfg(test)]
#[cfg(test)]
pub use leave_repository::MockLeaveRepositoryTrait;
