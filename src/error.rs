//! Error types for the few fallible paths in the crate. Roster mutations are
//! lenient and never return these; only the strict reassignment and settings
//! parsing do.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{FamilyId, MemberId};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    #[error("Member {0} not found.")]
    MemberNotFound(MemberId),

    #[error("Family {0} not found.")]
    FamilyNotFound(FamilyId),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported log level `{0}` (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("log directory `{}` must be an absolute path", .0.display())]
    RelativeLogDir(PathBuf),

    #[error("could not locate home directory")]
    NoHomeDir,
}
