//! Core library surface for the church attendance roster.
//!
//! The roster store is usable on its own; the `ui` module wraps it in a
//! terminal front-end and `main.rs` wires both to logging.
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod roster;
pub mod service;
pub mod ui;

pub use config::Settings;
pub use error::{ConfigError, RosterError};
pub use logging::init_logging;

/// The domain types a presentation layer works with.
pub use models::{
    BucketId, CheckState, Family, FamilyId, Member, MemberId, NameKey, NewMember,
};
pub use roster::{group_members, AttendanceMap, Bucket, Roster, RosterSummary};
pub use service::{format_service_date, ServiceKind};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
