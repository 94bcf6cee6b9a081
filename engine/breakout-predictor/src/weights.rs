//! Declarative weight tables for the breakout model.
//!
//! These constants are empirically tuned; behavioral parity with the
//! documented scenarios matters more than re-deriving "better" values.

use analytics_types::Position;

/// Blend weights for the four factor sub-scores. Sums to 1.0.
pub const OPPORTUNITY_WEIGHT: f64 = 0.35;
pub const EFFICIENCY_WEIGHT: f64 = 0.30;
pub const SITUATION_WEIGHT: f64 = 0.20;
pub const SCHEDULE_WEIGHT: f64 = 0.15;

/// Breakout-score-to-probability multiplier per position.
pub fn position_multiplier(position: Position) -> f64 {
    match position {
        Position::Wr => 1.1,
        Position::Rb => 1.0,
        Position::Te => 0.9,
        Position::Qb => 0.8,
        Position::K => 0.3,
        Position::Dst => 0.4,
    }
}

/// Teams whose offenses lift every attached skill player's ceiling.
pub const HIGH_POWERED_OFFENSES: [&str; 8] =
    ["BAL", "BUF", "DAL", "DET", "KC", "MIA", "PHI", "SF"];

/// True when the team abbreviation is on the high-powered offense list.
pub fn is_high_powered_offense(team: &str) -> bool {
    HIGH_POWERED_OFFENSES.iter().any(|t| t.eq_ignore_ascii_case(team))
}

/// Candidates below this probability are not worth surfacing.
pub const CANDIDATE_PROBABILITY_FLOOR: f64 = 45.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_weights_sum_to_one() {
        let sum = OPPORTUNITY_WEIGHT + EFFICIENCY_WEIGHT + SITUATION_WEIGHT + SCHEDULE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn multipliers_match_documented_values() {
        assert_eq!(position_multiplier(Position::Wr), 1.1);
        assert_eq!(position_multiplier(Position::Rb), 1.0);
        assert_eq!(position_multiplier(Position::Te), 0.9);
        assert_eq!(position_multiplier(Position::Qb), 0.8);
        assert_eq!(position_multiplier(Position::K), 0.3);
        assert_eq!(position_multiplier(Position::Dst), 0.4);
    }

    #[test]
    fn offense_list_lookup_ignores_case() {
        assert!(is_high_powered_offense("KC"));
        assert!(is_high_powered_offense("kc"));
        assert!(!is_high_powered_offense("CAR"));
    }
}
