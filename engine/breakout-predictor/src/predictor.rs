//! Factor combination and candidate ranking.

use crate::factors::{
    efficiency_factor, opportunity_factor, schedule_factor, situation_factor,
};
use crate::weights::{
    position_multiplier, CANDIDATE_PROBABILITY_FLOOR, EFFICIENCY_WEIGHT, OPPORTUNITY_WEIGHT,
    SCHEDULE_WEIGHT, SITUATION_WEIGHT,
};
use analytics_types::{
    BreakoutPrediction, Impact, KeyFactor, PlayerSnapshot, RecommendedAction, Timeframe,
};
use tracing::debug;

const CONFIDENCE_BASE: f64 = 60.0;
const CONFIDENCE_PER_POSITIVE: f64 = 5.0;
const CONFIDENCE_CAP: f64 = 95.0;

/// Run the four-factor model for one player at the given week.
pub fn predict_breakout(player: &PlayerSnapshot, current_week: u32) -> BreakoutPrediction {
    let opportunity = opportunity_factor(player);
    let efficiency = efficiency_factor(player);
    let situation = situation_factor(player);
    let schedule = schedule_factor(current_week);

    let breakout_score = opportunity.score * OPPORTUNITY_WEIGHT
        + efficiency.score * EFFICIENCY_WEIGHT
        + situation.score * SITUATION_WEIGHT
        + schedule.score * SCHEDULE_WEIGHT;

    let breakout_probability =
        (breakout_score * position_multiplier(player.position)).clamp(0.0, 100.0);

    let mut key_factors = opportunity.factors;
    key_factors.extend(efficiency.factors);
    key_factors.extend(situation.factors);
    key_factors.extend(schedule.factors);

    let positive_count =
        key_factors.iter().filter(|f| f.impact == Impact::Positive).count();
    let confidence =
        (CONFIDENCE_BASE + CONFIDENCE_PER_POSITIVE * positive_count as f64).min(CONFIDENCE_CAP);

    let timeframe = if breakout_score > 75.0 && efficiency.score > 70.0 {
        Timeframe::Immediate
    } else if breakout_score > 60.0 {
        Timeframe::ShortTerm
    } else {
        Timeframe::LongTerm
    };

    let recommended_action = if breakout_probability > 75.0 {
        RecommendedAction::AddNow
    } else if breakout_probability > 60.0 {
        RecommendedAction::Monitor
    } else if breakout_probability > 45.0 {
        RecommendedAction::Wait
    } else {
        RecommendedAction::Pass
    };

    let reasoning = build_reasoning(&player.name, &key_factors);

    debug!(
        player = %player.name,
        breakout_score,
        breakout_probability,
        ?recommended_action,
        "breakout prediction"
    );

    BreakoutPrediction {
        player_id: player.id.clone(),
        player_name: player.name.clone(),
        position: player.position,
        breakout_score,
        breakout_probability,
        confidence,
        key_factors,
        timeframe,
        reasoning,
        recommended_action,
    }
}

// Top three positive factors by weight, heaviest first.
fn build_reasoning(name: &str, key_factors: &[KeyFactor]) -> String {
    let mut positives: Vec<&KeyFactor> =
        key_factors.iter().filter(|f| f.impact == Impact::Positive).collect();
    positives.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
    positives.truncate(3);

    if positives.is_empty() {
        return format!("{name} shows no breakout indicators right now");
    }
    let labels: Vec<&str> = positives.iter().map(|f| f.factor.as_str()).collect();
    format!("{name} shows breakout potential: {}", labels.join(", "))
}

/// Rank the breakout candidates in a player pool.
///
/// Filters out probabilities at or below the floor, sorts descending by
/// breakout score (stable, so input order breaks ties), and truncates.
pub fn find_breakout_candidates(
    players: &[PlayerSnapshot],
    current_week: u32,
    limit: usize,
) -> Vec<BreakoutPrediction> {
    find_candidates(players, current_week, limit, CANDIDATE_PROBABILITY_FLOOR)
}

/// [`find_breakout_candidates`] with a caller-supplied probability floor.
pub fn find_candidates(
    players: &[PlayerSnapshot],
    current_week: u32,
    limit: usize,
    probability_floor: f64,
) -> Vec<BreakoutPrediction> {
    let mut candidates: Vec<BreakoutPrediction> = players
        .iter()
        .map(|p| predict_breakout(p, current_week))
        .filter(|p| p.breakout_probability > probability_floor)
        .collect();
    candidates.sort_by(|a, b| {
        b.breakout_score.partial_cmp(&a.breakout_score).unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(limit);
    candidates
}
