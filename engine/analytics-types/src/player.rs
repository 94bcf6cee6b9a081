//! Player records: raw snapshots in, enriched players out.

use crate::position::Position;
use crate::schedule::PlayerSchedule;
use serde::{Deserialize, Serialize};

/// Immutable input record describing a player's season to date.
///
/// Produced by the persistence layer; the engine never mutates one, every
/// operation returns a new enriched copy. Optional advanced signals
/// (target share, snap count, red-zone targets) are carried through when a
/// feed already supplies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub team: Option<String>,
    /// Fantasy points scored so far this season.
    #[serde(default)]
    pub fantasy_points_to_date: f64,
    /// Rest-of-season projected fantasy points.
    #[serde(default)]
    pub projected_points: f64,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    /// Pre-existing target share percentage, if the feed supplies one.
    #[serde(default)]
    pub target_share: Option<f64>,
    /// Pre-existing snap share percentage, if the feed supplies one.
    #[serde(default)]
    pub snap_count: Option<f64>,
    /// Pre-existing red-zone target count, if the feed supplies one.
    #[serde(default)]
    pub red_zone_targets: Option<f64>,
}

/// Direction of a player's recent production relative to projection.
///
/// "No signal" is represented as `Option<Trend> = None`: either the player
/// has no projection baseline, or production sits within normal variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Hot,
    Up,
    Down,
}

/// Qualitative upside rationale for a player, with an additive score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Bounded to [0, 100].
    pub score: f64,
    /// Ordered checklist of the reasons that triggered.
    pub reasons: Vec<String>,
}

/// A player snapshot plus every derived analytics field.
///
/// Computed on demand per request; never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPlayer {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub team: Option<String>,
    pub fantasy_points_to_date: f64,
    pub projected_points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,

    /// Trend label; omitted from output when no signal is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending: Option<Trend>,
    /// Estimated league-wide ownership, a multiple of 5 in [0, 95].
    pub ownership: u32,
    /// Composite score in [0, 100].
    pub ai_score: f64,
    /// Breakout probability in [0, 100].
    pub breakout_probability: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_share: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red_zone_targets: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes_run: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yards_per_route: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity: Option<Opportunity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_schedule: Option<PlayerSchedule>,
}
