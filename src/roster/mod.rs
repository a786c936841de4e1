//! In-memory roster store split across logical submodules.

mod attendance;
mod grouping;
mod seed;
mod store;

pub use attendance::AttendanceMap;
pub use grouping::{group_members, Bucket, RosterSummary};
pub use store::Roster;
