//! The analytics service: enrichment, breakout queries, schedule/SOS,
//! and trade analysis behind one instance.

use crate::config::AnalyticsConfig;
use analytics_types::{
    BreakoutPrediction, EnrichedPlayer, PlayerSchedule, PlayerSnapshot, Position, TeamSos,
    TradeAnalysis, TradeProposal,
};
use breakout_predictor::predictor;
use chrono::{DateTime, Utc};
use player_analytics::{ai_score, signals, trending};
use schedule_analyzer::{ScheduleAnalyzer, ScheduleError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use trade_valuation::{analyze_trade, TradeError};
use tracing::info;

/// A batch enrichment result with its generation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentReport {
    pub generated_at: DateTime<Utc>,
    pub current_week: u32,
    pub players: Vec<EnrichedPlayer>,
}

/// Main service struct. Cheap to construct; the schedule analyzer's
/// memoization cache is the only state it carries.
#[derive(Debug, Default)]
pub struct AnalyticsService {
    config: AnalyticsConfig,
    schedule: ScheduleAnalyzer,
}

impl AnalyticsService {
    pub fn new(config: AnalyticsConfig) -> Self {
        let schedule = ScheduleAnalyzer::with_window(
            config.schedule.near_term_weeks,
            config.schedule.season_weeks,
        );
        Self { config, schedule }
    }

    /// Enrich one snapshot with every derived analytics field.
    ///
    /// Never fails: malformed numerics produce bounded defaults, and an
    /// unknown or missing team simply omits the schedule.
    pub fn enrich_player(&self, snapshot: &PlayerSnapshot, current_week: u32) -> EnrichedPlayer {
        let prediction = predictor::predict_breakout(snapshot, current_week);

        let upcoming_schedule = snapshot.team.as_deref().and_then(|team| {
            self.schedule
                .player_schedule(&snapshot.id, &snapshot.name, team, snapshot.position, current_week)
                .ok()
                .map(|arc| (*arc).clone())
        });

        EnrichedPlayer {
            id: snapshot.id.clone(),
            name: snapshot.name.clone(),
            position: snapshot.position,
            team: snapshot.team.clone(),
            fantasy_points_to_date: snapshot.fantasy_points_to_date,
            projected_points: snapshot.projected_points,
            age: snapshot.age,
            experience_years: snapshot.experience_years,
            trending: trending::classify_trend(snapshot),
            ownership: trending::estimate_ownership(snapshot),
            ai_score: ai_score::ai_score(snapshot),
            breakout_probability: prediction.breakout_probability,
            target_share: signals::target_share(snapshot),
            snap_count: signals::snap_count(snapshot),
            red_zone_targets: signals::red_zone_targets(snapshot),
            routes_run: signals::routes_run(snapshot),
            yards_per_route: signals::yards_per_route(snapshot),
            opportunity: ai_score::opportunity(snapshot),
            upcoming_schedule,
        }
    }

    /// Enrich a batch of snapshots into a timestamped report.
    pub fn enrich_players(
        &self,
        snapshots: &[PlayerSnapshot],
        current_week: u32,
    ) -> EnrichmentReport {
        let players =
            snapshots.iter().map(|s| self.enrich_player(s, current_week)).collect::<Vec<_>>();
        info!(count = players.len(), current_week, "enriched player batch");
        EnrichmentReport { generated_at: Utc::now(), current_week, players }
    }

    /// Ranked breakout candidates from a player pool.
    ///
    /// Uses the configured probability floor; `limit` falls back to the
    /// configured default.
    pub fn breakout_candidates(
        &self,
        players: &[PlayerSnapshot],
        current_week: u32,
        limit: Option<usize>,
    ) -> Vec<BreakoutPrediction> {
        let limit = limit.unwrap_or(self.config.breakout.default_limit);
        predictor::find_candidates(
            players,
            current_week,
            limit,
            self.config.breakout.probability_floor,
        )
    }

    /// Run one breakout prediction without pool filtering.
    pub fn predict_breakout(
        &self,
        player: &PlayerSnapshot,
        current_week: u32,
    ) -> BreakoutPrediction {
        predictor::predict_breakout(player, current_week)
    }

    /// Analyze a trade proposal; validation failures surface as typed
    /// errors for the API layer to map.
    pub fn analyze_trade(&self, proposal: &TradeProposal) -> Result<TradeAnalysis, TradeError> {
        analyze_trade(proposal)
    }

    /// A player's upcoming schedule (memoized).
    pub fn player_schedule(
        &self,
        player_id: &str,
        player_name: &str,
        team: &str,
        position: Position,
        current_week: u32,
    ) -> Result<Arc<PlayerSchedule>, ScheduleError> {
        self.schedule.player_schedule(player_id, player_name, team, position, current_week)
    }

    /// One team's strength of schedule (memoized).
    pub fn team_sos(
        &self,
        team_id: &str,
        team_name: &str,
        current_week: u32,
    ) -> Result<Arc<TeamSos>, ScheduleError> {
        self.schedule.team_sos(team_id, team_name, current_week)
    }

    /// Remaining SOS against one position for all 32 teams.
    pub fn position_sos(&self, position: Position, current_week: u32) -> BTreeMap<String, f64> {
        self.schedule.position_sos(position, current_week)
    }

    /// Drop all memoized schedule/SOS results.
    pub fn clear_schedule_cache(&self) {
        self.schedule.clear_cache();
    }
}
