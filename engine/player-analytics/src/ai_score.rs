//! Composite AI score and opportunity rationale.

use analytics_types::numeric::safe_f64;
use analytics_types::{Opportunity, PlayerSnapshot, Position};

const PRODUCTION_WEIGHT: f64 = 0.6;
const CONSISTENCY_WEIGHT: f64 = 0.4;
const PRODUCTION_CAP_POINTS: f64 = 200.0;

/// Composite score in [0, 100] blending absolute production with
/// production-vs-projection consistency.
///
/// The consistency sub-component saturates at ratio 1.0: a player who
/// matches projection tightly scores at least as well there as one who
/// wildly overshoots. Zero points against a nonzero projection always
/// lands below 50. Non-decreasing in points for a fixed projection.
pub fn ai_score(player: &PlayerSnapshot) -> f64 {
    let points = safe_f64(player.fantasy_points_to_date, 0.0).max(0.0);
    let projection = safe_f64(player.projected_points, 0.0).max(0.0);

    let production = (points / PRODUCTION_CAP_POINTS).min(1.0) * 100.0;
    let consistency = if projection > 0.0 {
        (points / projection).min(1.0) * 100.0
    } else if points > 0.0 {
        // No baseline to judge against; neutral credit for producing at all.
        60.0
    } else {
        0.0
    };

    (PRODUCTION_WEIGHT * production + CONSISTENCY_WEIGHT * consistency).clamp(0.0, 100.0)
}

// Opportunity checklist thresholds and weights, applied in fixed order.
const OPPORTUNITY_BASE: f64 = 40.0;
const HIGH_PROJECTION_POINTS: f64 = 150.0;
const HIGH_PROJECTION_WEIGHT: f64 = 25.0;
const EXCEED_PROJECTION_RATIO: f64 = 1.2;
const EXCEED_PROJECTION_WEIGHT: f64 = 30.0;
const SCARCITY_WEIGHT: f64 = 15.0;
const STRONG_PRODUCTION_POINTS: f64 = 120.0;
const STRONG_PRODUCTION_WEIGHT: f64 = 20.0;

/// Upside rationale for a player.
///
/// Returns `None` for low-upside players: flat production, flat projection,
/// no positional scarcity. Reasons are additive and the score caps at 100.
pub fn opportunity(player: &PlayerSnapshot) -> Option<Opportunity> {
    let points = safe_f64(player.fantasy_points_to_date, 0.0).max(0.0);
    let projection = safe_f64(player.projected_points, 0.0).max(0.0);

    let mut reasons = Vec::new();
    let mut score = OPPORTUNITY_BASE;

    if projection >= HIGH_PROJECTION_POINTS {
        reasons.push("High projected points".to_string());
        score += HIGH_PROJECTION_WEIGHT;
    }
    if projection > 0.0 && points > projection * EXCEED_PROJECTION_RATIO {
        reasons.push("Exceeding projections".to_string());
        score += EXCEED_PROJECTION_WEIGHT;
    }
    if matches!(player.position, Position::Rb | Position::Te) {
        reasons.push("Position scarcity".to_string());
        score += SCARCITY_WEIGHT;
    }
    if points >= STRONG_PRODUCTION_POINTS {
        reasons.push("Strong recent performance".to_string());
        score += STRONG_PRODUCTION_WEIGHT;
    }

    if reasons.is_empty() {
        return None;
    }
    Some(Opportunity { score: score.min(100.0), reasons })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(position: Position, points: f64, projection: f64) -> PlayerSnapshot {
        PlayerSnapshot {
            id: "p1".to_string(),
            name: "Test Player".to_string(),
            position,
            team: None,
            fantasy_points_to_date: points,
            projected_points: projection,
            age: None,
            experience_years: None,
            target_share: None,
            snap_count: None,
            red_zone_targets: None,
        }
    }

    #[test]
    fn score_stays_bounded() {
        for (points, projection) in
            [(0.0, 0.0), (0.0, 300.0), (500.0, 1.0), (f64::NAN, f64::INFINITY), (-20.0, 50.0)]
        {
            let score = ai_score(&snapshot(Position::Wr, points, projection));
            assert!((0.0..=100.0).contains(&score), "score {score} out of bounds");
        }
    }

    #[test]
    fn zero_points_with_projection_scores_below_fifty() {
        let score = ai_score(&snapshot(Position::Wr, 0.0, 180.0));
        assert!(score < 50.0);
    }

    #[test]
    fn score_is_monotone_in_points_for_fixed_projection() {
        let mut prev = f64::MIN;
        for points in [0.0, 20.0, 60.0, 100.0, 150.0, 220.0, 400.0] {
            let score = ai_score(&snapshot(Position::Rb, points, 160.0));
            assert!(score >= prev, "score dropped from {prev} to {score} at {points} points");
            prev = score;
        }
    }

    #[test]
    fn matching_projection_scores_no_worse_than_overshooting() {
        // Same production; one player was projected for exactly that, the
        // other massively overshot a tiny projection.
        let steady = ai_score(&snapshot(Position::Wr, 150.0, 150.0));
        let boom = ai_score(&snapshot(Position::Wr, 150.0, 40.0));
        assert!(steady >= boom);
    }

    #[test]
    fn opportunity_none_for_flat_players() {
        assert!(opportunity(&snapshot(Position::Wr, 20.0, 40.0)).is_none());
        assert!(opportunity(&snapshot(Position::Qb, 0.0, 0.0)).is_none());
    }

    #[test]
    fn opportunity_reasons_are_additive_and_ordered() {
        // RB exceeding a high projection with strong production: all four.
        let opp = opportunity(&snapshot(Position::Rb, 200.0, 150.0)).unwrap();
        assert_eq!(
            opp.reasons,
            vec![
                "High projected points",
                "Exceeding projections",
                "Position scarcity",
                "Strong recent performance"
            ]
        );
        assert_eq!(opp.score, 100.0, "score caps at 100 even with all reasons");
    }

    #[test]
    fn opportunity_single_reason() {
        let opp = opportunity(&snapshot(Position::Te, 10.0, 40.0)).unwrap();
        assert_eq!(opp.reasons, vec!["Position scarcity"]);
        assert!(opp.score < 100.0);
    }
}
