//! # Player Analytics
//!
//! Pure, position-gated calculators over [`PlayerSnapshot`] records:
//! receiving-game signals (target share, snap share, red-zone usage, routes,
//! yards per route), the trend/ownership classifier, and the composite AI
//! score with its opportunity rationale.
//!
//! Nothing in this crate fails on malformed input: untrusted numbers are
//! absorbed by the numeric safety layer and produce bounded defaults, so a
//! dashboard always has something to render.
//!
//! [`PlayerSnapshot`]: analytics_types::PlayerSnapshot

pub mod ai_score;
pub mod signals;
pub mod trending;

pub use ai_score::{ai_score, opportunity};
pub use signals::{red_zone_targets, routes_run, snap_count, target_share, yards_per_route};
pub use trending::{classify_trend, estimate_ownership};
