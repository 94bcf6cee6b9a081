//! The memoizing schedule/SOS analyzer.

use crate::error::ScheduleError;
use crate::league::{
    difficulty, opponent_index, position_rank, team_index, LEAGUE, SEASON_WEEKS, TEAM_COUNT,
};
use analytics_types::{MatchupRating, PlayerSchedule, Position, ScheduleEntry, TeamSos};
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

const NEAR_TERM_WEEKS: usize = 3;
const PLAYOFF_WEEKS: std::ops::RangeInclusive<u32> = 15..=17;

/// Schedule difficulty and SOS calculator with instance-owned memoization.
///
/// All computation is deterministic, so the caches exist purely to avoid
/// redundant recomputation; concurrent writes of the same key are idempotent
/// and need no coordination beyond the map itself. Values are stored as
/// `Arc`s, so a repeated query returns the identical object until
/// [`clear_cache`](Self::clear_cache).
#[derive(Debug)]
pub struct ScheduleAnalyzer {
    near_term_weeks: usize,
    season_weeks: u32,
    schedule_cache: DashMap<(String, u32), Arc<PlayerSchedule>>,
    sos_cache: DashMap<(String, u32), Arc<TeamSos>>,
}

impl Default for ScheduleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleAnalyzer {
    pub fn new() -> Self {
        Self::with_window(NEAR_TERM_WEEKS, SEASON_WEEKS)
    }

    /// Analyzer with a custom near-term window and season length. The
    /// season length is capped at the 18-week league year.
    pub fn with_window(near_term_weeks: usize, season_weeks: u32) -> Self {
        Self {
            near_term_weeks,
            season_weeks: season_weeks.clamp(1, SEASON_WEEKS),
            schedule_cache: DashMap::new(),
            sos_cache: DashMap::new(),
        }
    }

    /// A player's schedule from `current_week` through the end of the
    /// season: the near-term window plus the rest of the season.
    ///
    /// Memoized by `(player_id, current_week)`.
    pub fn player_schedule(
        &self,
        player_id: &str,
        player_name: &str,
        team: &str,
        position: Position,
        current_week: u32,
    ) -> Result<Arc<PlayerSchedule>, ScheduleError> {
        let key = (player_id.to_string(), current_week);
        if let Some(cached) = self.schedule_cache.get(&key) {
            return Ok(Arc::clone(&cached));
        }

        let team_idx =
            team_index(team).ok_or_else(|| ScheduleError::UnknownTeam(team.to_string()))?;

        let first_week = current_week.clamp(1, self.season_weeks);
        let mut entries = Vec::new();
        for week in first_week..=self.season_weeks {
            entries.push(build_entry(team_idx, position, week));
        }

        let favorable =
            entries.iter().filter(|e| e.rating == MatchupRating::Easy).count() as u32;
        let tough =
            entries.iter().filter(|e| e.rating == MatchupRating::VeryHard).count() as u32;
        let average_difficulty = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.difficulty).sum::<f64>() / entries.len() as f64
        };

        let rest_of_season = entries.split_off(entries.len().min(self.near_term_weeks));
        let schedule = Arc::new(PlayerSchedule {
            player_id: player_id.to_string(),
            player_name: player_name.to_string(),
            team: LEAGUE[team_idx].abbr.to_string(),
            position,
            current_week,
            next_three: entries,
            rest_of_season,
            favorable_matchups: favorable,
            tough_matchups: tough,
            average_difficulty,
        });

        debug!(player_id, current_week, "computed player schedule");
        self.schedule_cache.insert(key, Arc::clone(&schedule));
        Ok(schedule)
    }

    /// Strength of schedule for one team: overall, remaining, playoff, a
    /// six-position breakdown, and a 1-32 remaining-SOS ranking.
    ///
    /// Memoized by `(team_id, current_week)`.
    pub fn team_sos(
        &self,
        team_id: &str,
        team_name: &str,
        current_week: u32,
    ) -> Result<Arc<TeamSos>, ScheduleError> {
        let key = (team_id.to_string(), current_week);
        if let Some(cached) = self.sos_cache.get(&key) {
            return Ok(Arc::clone(&cached));
        }

        let team_idx =
            team_index(team_id).ok_or_else(|| ScheduleError::UnknownTeam(team_id.to_string()))?;
        let first_week = current_week.clamp(1, self.season_weeks);

        let overall_sos = mean_sos(team_idx, 1..=self.season_weeks);
        let remaining_sos = mean_sos(team_idx, first_week..=self.season_weeks);
        let playoff_sos = mean_sos(team_idx, PLAYOFF_WEEKS);

        let mut by_position = BTreeMap::new();
        for pos in Position::CORE {
            by_position.insert(pos, mean_position_sos(team_idx, pos, first_week, self.season_weeks));
        }

        // Rank all 32 teams by remaining SOS, hardest first; stable order
        // over the league table breaks ties.
        let remaining: Vec<f64> =
            (0..TEAM_COUNT).map(|idx| mean_sos(idx, first_week..=self.season_weeks)).collect();
        let mut order: Vec<usize> = (0..TEAM_COUNT).collect();
        order.sort_by(|&a, &b| {
            remaining[b].partial_cmp(&remaining[a]).unwrap_or(std::cmp::Ordering::Equal)
        });
        let ranking = order.iter().position(|&idx| idx == team_idx).unwrap_or(0) as u32 + 1;

        let sos = Arc::new(TeamSos {
            team_id: LEAGUE[team_idx].abbr.to_string(),
            team_name: team_name.to_string(),
            overall_sos,
            remaining_sos,
            playoff_sos,
            by_position,
            ranking,
        });

        debug!(team_id, current_week, ranking, "computed team SOS");
        self.sos_cache.insert(key, Arc::clone(&sos));
        Ok(sos)
    }

    /// Remaining SOS against one position for every team in the league.
    ///
    /// Always returns exactly 32 entries, each in [0, 1].
    pub fn position_sos(&self, position: Position, current_week: u32) -> BTreeMap<String, f64> {
        let first_week = current_week.clamp(1, self.season_weeks);
        LEAGUE
            .iter()
            .enumerate()
            .map(|(idx, team)| {
                (team.abbr.to_string(), mean_position_sos(idx, position, first_week, self.season_weeks))
            })
            .collect()
    }

    /// Drop every memoized schedule and SOS result.
    pub fn clear_cache(&self) {
        self.schedule_cache.clear();
        self.sos_cache.clear();
    }
}

fn build_entry(team_idx: usize, position: Position, week: u32) -> ScheduleEntry {
    let opp_idx = opponent_index(team_idx, week);
    let diff = difficulty(opp_idx, position, week);
    let mut position_rankings = BTreeMap::new();
    for pos in Position::CORE {
        position_rankings.insert(pos, position_rank(opp_idx, pos, week));
    }
    ScheduleEntry {
        week,
        opponent: LEAGUE[opp_idx].abbr.to_string(),
        difficulty: diff,
        rating: MatchupRating::from_difficulty(diff),
        position_rankings,
    }
}

// Mean across the six core positions, then across the week range.
fn mean_sos(team_idx: usize, weeks: std::ops::RangeInclusive<u32>) -> f64 {
    let mut total = 0.0;
    let mut count = 0;
    for week in weeks {
        let opp_idx = opponent_index(team_idx, week);
        let week_mean = Position::CORE
            .iter()
            .map(|&pos| difficulty(opp_idx, pos, week))
            .sum::<f64>()
            / Position::CORE.len() as f64;
        total += week_mean;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn mean_position_sos(team_idx: usize, position: Position, first_week: u32, last_week: u32) -> f64 {
    let mut total = 0.0;
    let mut count = 0;
    for week in first_week..=last_week {
        let opp_idx = opponent_index(team_idx, week);
        total += difficulty(opp_idx, position, week);
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
