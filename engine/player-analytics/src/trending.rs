//! Trend classification and ownership estimation.

use analytics_types::numeric::safe_f64;
use analytics_types::{PlayerSnapshot, Position, Trend};
use tracing::debug;

// Production-to-projection ratio thresholds.
const HOT_RATIO: f64 = 1.5;
const UP_RATIO: f64 = 1.15;
const DOWN_RATIO: f64 = 0.8;

/// Classify a player's trend from production vs. projection.
///
/// Without a projection baseline there is nothing to assess, so the result
/// is `None`. A ratio inside normal variance also emits no signal. Zero
/// points against a nonzero projection always classifies as [`Trend::Down`].
pub fn classify_trend(player: &PlayerSnapshot) -> Option<Trend> {
    let points = safe_f64(player.fantasy_points_to_date, 0.0).max(0.0);
    let projection = safe_f64(player.projected_points, 0.0);
    if projection <= 0.0 {
        return None;
    }

    let ratio = points / projection;
    let trend = if ratio > HOT_RATIO {
        Some(Trend::Hot)
    } else if ratio > UP_RATIO {
        Some(Trend::Up)
    } else if ratio < DOWN_RATIO {
        Some(Trend::Down)
    } else {
        None
    };
    debug!(player = %player.name, ratio, ?trend, "classified trend");
    trend
}

// Ownership climbs roughly half a percent per fantasy point, plus a
// scarcity bump for positions where startable bodies run out first.
const OWNERSHIP_PER_POINT: f64 = 0.55;
const OWNERSHIP_BASE_CAP: f64 = 90.0;
const KICKER_OWNERSHIP_CAP: f64 = 30.0;
const OWNERSHIP_MAX: u32 = 95;

fn scarcity_bonus(position: Position) -> f64 {
    match position {
        Position::Rb => 10.0,
        Position::Te => 8.0,
        Position::Wr => 5.0,
        Position::Qb => 3.0,
        Position::K | Position::Dst => 0.0,
    }
}

/// Estimate league-wide ownership percentage.
///
/// Always a multiple of 5 in [0, 95]. Zero points means zero ownership.
/// Kickers cap at 30 regardless of production; nobody rosters a kicker in
/// every league.
pub fn estimate_ownership(player: &PlayerSnapshot) -> u32 {
    let points = safe_f64(player.fantasy_points_to_date, 0.0);
    if points <= 0.0 {
        return 0;
    }

    let base = (points * OWNERSHIP_PER_POINT).min(OWNERSHIP_BASE_CAP);
    let mut raw = base + scarcity_bonus(player.position);
    if player.position == Position::K {
        raw = raw.min(KICKER_OWNERSHIP_CAP);
    }

    let rounded = ((raw / 5.0).round() * 5.0) as u32;
    rounded.min(OWNERSHIP_MAX)
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
    fn no_projection_means_no_signal() {
        assert_eq!(classify_trend(&snapshot(Position::Wr, 10.0, 0.0)), None);
        assert_eq!(classify_trend(&snapshot(Position::Wr, 10.0, -5.0)), None);
        assert_eq!(classify_trend(&snapshot(Position::Wr, 10.0, f64::NAN)), None);
    }

    #[test]
    fn ratio_thresholds() {
        assert_eq!(classify_trend(&snapshot(Position::Wr, 16.0, 10.0)), Some(Trend::Hot));
        assert_eq!(classify_trend(&snapshot(Position::Wr, 13.0, 10.0)), Some(Trend::Up));
        // Exactly 1.5x is still Up, not Hot.
        assert_eq!(classify_trend(&snapshot(Position::Wr, 15.0, 10.0)), Some(Trend::Up));
        assert_eq!(classify_trend(&snapshot(Position::Wr, 7.0, 10.0)), Some(Trend::Down));
        // Within normal variance: no signal.
        assert_eq!(classify_trend(&snapshot(Position::Wr, 10.0, 10.0)), None);
        assert_eq!(classify_trend(&snapshot(Position::Wr, 8.0, 10.0)), None);
    }

    #[test]
    fn zero_points_with_projection_is_down() {
        assert_eq!(classify_trend(&snapshot(Position::Rb, 0.0, 10.0)), Some(Trend::Down));
    }

    #[test]
    fn ownership_is_multiple_of_five_in_range() {
        for points in [0.0, 1.0, 13.7, 42.0, 99.9, 150.0, 250.0, 400.0] {
            for pos in Position::CORE {
                let own = estimate_ownership(&snapshot(pos, points, 100.0));
                assert_eq!(own % 5, 0, "ownership {own} not a multiple of 5");
                assert!(own <= 95);
            }
        }
    }

    #[test]
    fn zero_points_means_zero_ownership() {
        assert_eq!(estimate_ownership(&snapshot(Position::Rb, 0.0, 200.0)), 0);
        assert_eq!(estimate_ownership(&snapshot(Position::Rb, -5.0, 200.0)), 0);
        assert_eq!(estimate_ownership(&snapshot(Position::Rb, f64::NAN, 200.0)), 0);
    }

    #[test]
    fn kickers_cap_at_thirty() {
        let own = estimate_ownership(&snapshot(Position::K, 400.0, 100.0));
        assert!(own <= 30);
        // A productive skill player clears the kicker cap easily.
        let rb = estimate_ownership(&snapshot(Position::Rb, 400.0, 100.0));
        assert!(rb > 30);
    }
}
