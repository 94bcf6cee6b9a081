//! Schedule difficulty and strength-of-schedule records.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Four-tier matchup difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchupRating {
    Easy,
    Moderate,
    Hard,
    VeryHard,
}

impl MatchupRating {
    /// Bucket a difficulty value in [0, 1] into a rating tier.
    pub fn from_difficulty(difficulty: f64) -> Self {
        if difficulty < 0.35 {
            MatchupRating::Easy
        } else if difficulty < 0.55 {
            MatchupRating::Moderate
        } else if difficulty < 0.75 {
            MatchupRating::Hard
        } else {
            MatchupRating::VeryHard
        }
    }
}

/// One week of a player's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Week number, 1-18.
    pub week: u32,
    /// Opponent team abbreviation.
    pub opponent: String,
    /// Matchup difficulty in [0, 1]; higher is tougher.
    pub difficulty: f64,
    pub rating: MatchupRating,
    /// Opponent's defensive rank (1 = toughest) against each core position.
    pub position_rankings: BTreeMap<Position, u32>,
}

/// A player's near-term schedule plus the rest of the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSchedule {
    pub player_id: String,
    pub player_name: String,
    pub team: String,
    pub position: Position,
    pub current_week: u32,
    /// The next three weeks, the window most lineup decisions care about.
    pub next_three: Vec<ScheduleEntry>,
    /// Remaining weeks of the 18-week season after the near-term window.
    pub rest_of_season: Vec<ScheduleEntry>,
    pub favorable_matchups: u32,
    pub tough_matchups: u32,
    /// Mean difficulty over every returned week, in [0, 1].
    pub average_difficulty: f64,
}

/// Strength of schedule for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSos {
    pub team_id: String,
    pub team_name: String,
    /// Full-season SOS in [0, 1].
    pub overall_sos: f64,
    /// Rest-of-season SOS from the current week, in [0, 1].
    pub remaining_sos: f64,
    /// Fantasy-playoff-weeks (15-17) SOS in [0, 1].
    pub playoff_sos: f64,
    /// Remaining SOS broken down by the six core positions.
    pub by_position: BTreeMap<Position, f64>,
    /// 1-32 rank by remaining SOS; 1 is the hardest schedule.
    pub ranking: u32,
}
