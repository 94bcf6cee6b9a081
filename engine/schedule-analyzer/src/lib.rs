//! # Schedule Analyzer
//!
//! Per-player upcoming-schedule difficulty and per-team strength of
//! schedule (SOS) over the 32-team league, derived from a static team-tier
//! table and a deterministic opponent rotation. Results are memoized per
//! analyzer instance by `(id, week)` key; identical queries return the
//! identical `Arc` until [`ScheduleAnalyzer::clear_cache`] is called.

pub mod analyzer;
pub mod error;
pub mod league;

pub use analyzer::ScheduleAnalyzer;
pub use error::ScheduleError;
pub use league::{SEASON_WEEKS, TEAM_COUNT};
