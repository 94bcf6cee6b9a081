//! The four factor sub-models.
//!
//! Each factor starts from a 50-point base and applies tiered adds and
//! subtracts, recording every adjustment as a named [`KeyFactor`] so the
//! final prediction can explain itself. Scores clamp to [0, 100].

use crate::weights::is_high_powered_offense;
use analytics_types::numeric::safe_f64;
use analytics_types::{Impact, KeyFactor, PlayerSnapshot};
use player_analytics::signals;

const FACTOR_BASE: f64 = 50.0;

/// One factor's score plus the adjustments that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    /// Bounded to [0, 100].
    pub score: f64,
    pub factors: Vec<KeyFactor>,
}

impl FactorScore {
    fn new() -> Self {
        Self { score: FACTOR_BASE, factors: Vec::new() }
    }

    fn add(&mut self, label: &str, weight: f64) {
        self.score += weight;
        self.factors.push(KeyFactor {
            factor: label.to_string(),
            impact: Impact::Positive,
            weight,
        });
    }

    fn subtract(&mut self, label: &str, weight: f64) {
        self.score -= weight;
        self.factors.push(KeyFactor {
            factor: label.to_string(),
            impact: Impact::Negative,
            weight,
        });
    }

    fn clamped(mut self) -> Self {
        self.score = self.score.clamp(0.0, 100.0);
        self
    }
}

/// Usage-based opportunity: target share, snap share, red-zone looks.
pub fn opportunity_factor(player: &PlayerSnapshot) -> FactorScore {
    let mut fs = FactorScore::new();

    if let Some(ts) = signals::target_share(player) {
        if ts > 20.0 {
            fs.add("Elite target share", 20.0);
        } else if ts > 15.0 {
            fs.add("Solid target share", 10.0);
        } else if ts < 10.0 {
            fs.subtract("Limited target share", 10.0);
        }
    }

    if let Some(snaps) = signals::snap_count(player) {
        if snaps > 80.0 {
            fs.add("Every-down role", 15.0);
        } else if snaps > 65.0 {
            fs.add("Significant snap share", 5.0);
        } else if snaps < 40.0 {
            fs.subtract("Rotational role", 10.0);
        }
    }

    if let Some(rz) = signals::red_zone_targets(player) {
        if rz >= 5.0 {
            fs.add("Heavy red-zone usage", 15.0);
        } else if rz >= 3.0 {
            fs.add("Regular red-zone looks", 5.0);
        }
    }

    fs.clamped()
}

/// Production efficiency relative to projection.
pub fn efficiency_factor(player: &PlayerSnapshot) -> FactorScore {
    let mut fs = FactorScore::new();
    let points = safe_f64(player.fantasy_points_to_date, 0.0).max(0.0);
    let projection = safe_f64(player.projected_points, 0.0).max(0.0);

    if projection > 0.0 {
        let ratio = points / projection;
        if ratio >= 1.3 {
            fs.add("Significantly exceeding projections", 25.0);
        } else if ratio >= 1.1 {
            fs.add("Moderately exceeding projections", 12.0);
        } else if ratio < 0.8 {
            fs.subtract("Falling short of projections", 15.0);
        }
    }

    if points >= 100.0 {
        fs.add("Strong absolute production", 15.0);
    }

    fs.clamped()
}

/// Age, career stage, and offensive environment.
pub fn situation_factor(player: &PlayerSnapshot) -> FactorScore {
    let mut fs = FactorScore::new();

    if player.age.is_some_and(|age| age < 25) {
        fs.add("Young ascending player", 15.0);
    }
    if player.experience_years.is_some_and(|years| years <= 2) {
        fs.add("Early career breakout window", 12.0);
    }
    if player.team.as_deref().is_some_and(is_high_powered_offense) {
        fs.add("High-powered offense", 18.0);
    }

    fs.clamped()
}

/// Calendar-based schedule context for the given week.
pub fn schedule_factor(current_week: u32) -> FactorScore {
    let mut fs = FactorScore::new();

    if (11..=13).contains(&current_week) {
        fs.add("Fantasy playoff push window", 15.0);
    }
    if (6..=11).contains(&current_week) {
        fs.add("Bye weeks thin the competition", 8.0);
    }

    fs.clamped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_types::Position;

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
    fn all_factor_scores_stay_bounded() {
        for points in [0.0, 50.0, 150.0, 400.0] {
            for pos in Position::CORE {
                let s = snapshot(pos, points, 100.0);
                for fs in [
                    opportunity_factor(&s),
                    efficiency_factor(&s),
                    situation_factor(&s),
                ] {
                    assert!((0.0..=100.0).contains(&fs.score));
                }
            }
        }
        for week in 0..=18 {
            let fs = schedule_factor(week);
            assert!((0.0..=100.0).contains(&fs.score));
        }
    }

    #[test]
    fn opportunity_rewards_elite_target_share() {
        let mut s = snapshot(Position::Wr, 50.0, 100.0);
        s.target_share = Some(24.0);
        let fs = opportunity_factor(&s);
        assert!(fs.factors.iter().any(|f| f.factor == "Elite target share"));

        s.target_share = Some(7.0);
        let fs = opportunity_factor(&s);
        assert!(fs
            .factors
            .iter()
            .any(|f| f.factor == "Limited target share" && f.impact == Impact::Negative));
    }

    #[test]
    fn efficiency_tiers() {
        let fs = efficiency_factor(&snapshot(Position::Rb, 140.0, 100.0));
        assert!(fs.factors.iter().any(|f| f.factor == "Significantly exceeding projections"));

        let fs = efficiency_factor(&snapshot(Position::Rb, 115.0, 100.0));
        assert!(fs.factors.iter().any(|f| f.factor == "Moderately exceeding projections"));

        let fs = efficiency_factor(&snapshot(Position::Rb, 50.0, 100.0));
        assert!(fs.factors.iter().any(|f| f.impact == Impact::Negative));
        assert!(fs.score < FACTOR_BASE);

        // No projection: no ratio-based adjustment at all.
        let fs = efficiency_factor(&snapshot(Position::Rb, 50.0, 0.0));
        assert_eq!(fs.factors.len(), 0);
    }

    #[test]
    fn situation_stacks_youth_and_offense() {
        let mut s = snapshot(Position::Wr, 50.0, 100.0);
        s.age = Some(23);
        s.experience_years = Some(1);
        s.team = Some("KC".to_string());
        let fs = situation_factor(&s);
        assert_eq!(fs.factors.len(), 3);
        assert_eq!(fs.score, (50.0_f64 + 15.0 + 12.0 + 18.0).min(100.0));

        // A 30-year-old veteran on a bad offense gets the bare base.
        let mut s = snapshot(Position::Wr, 50.0, 100.0);
        s.age = Some(30);
        s.experience_years = Some(8);
        let fs = situation_factor(&s);
        assert_eq!(fs.score, FACTOR_BASE);
    }

    #[test]
    fn schedule_windows_overlap_at_week_eleven() {
        assert_eq!(schedule_factor(5).factors.len(), 0);
        assert_eq!(schedule_factor(8).factors.len(), 1);
        assert_eq!(schedule_factor(11).factors.len(), 2);
        assert_eq!(schedule_factor(12).factors.len(), 1);
        assert_eq!(schedule_factor(14).factors.len(), 0);
    }
}
