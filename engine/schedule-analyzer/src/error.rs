//! Error types for schedule and SOS lookups.

use thiserror::Error;

/// Errors that can occur resolving schedule queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("unknown team: {0}")]
    UnknownTeam(String),
}
