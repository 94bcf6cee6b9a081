//! Trade analysis: value sums, fairness, positional impact, guidance.

use crate::error::TradeError;
use analytics_types::{Fairness, Position, TradeAnalysis, TradePlayer, TradeProposal};
use std::collections::BTreeMap;
use tracing::info;

// Trades inside this projected-points band are considered even. Empirically
// chosen; kept in sync with the documented valuation scenarios.
const FAIRNESS_THRESHOLD: f64 = 5.0;

const CONFIDENCE_FLOOR: f64 = 0.05;
const CONFIDENCE_CEILING: f64 = 0.95;

/// Analyze a trade proposal from the proposing side's point of view.
///
/// `value_gap` is receiving minus giving; a gap of at least
/// `FAIRNESS_THRESHOLD` points in either direction tips the classification
/// out of `Fair`.
pub fn analyze_trade(proposal: &TradeProposal) -> Result<TradeAnalysis, TradeError> {
    validate(proposal)?;

    let giving_value = side_value(&proposal.giving);
    let receiving_value = side_value(&proposal.receiving);
    let value_gap = receiving_value - giving_value;

    let fairness = if value_gap.abs() < FAIRNESS_THRESHOLD {
        Fairness::Fair
    } else if value_gap > 0.0 {
        Fairness::Favorable
    } else {
        Fairness::Unfavorable
    };

    let positional_impact = positional_impact(&proposal.giving, &proposal.receiving);
    let recommendations = build_recommendations(fairness, value_gap, &positional_impact, proposal);
    let confidence = confidence(value_gap, proposal);

    info!(
        giving_value,
        receiving_value,
        value_gap,
        ?fairness,
        "trade analyzed"
    );

    Ok(TradeAnalysis {
        giving_value,
        receiving_value,
        value_gap,
        fairness,
        positional_impact,
        recommendations,
        confidence,
    })
}

fn validate(proposal: &TradeProposal) -> Result<(), TradeError> {
    if proposal.giving.is_empty() {
        return Err(TradeError::EmptyGivingSide);
    }
    if proposal.receiving.is_empty() {
        return Err(TradeError::EmptyReceivingSide);
    }
    for player in proposal.giving.iter().chain(&proposal.receiving) {
        if !player.projected_points.is_finite() || player.projected_points < 0.0 {
            return Err(TradeError::InvalidProjectedPoints { player: player.name.clone() });
        }
    }
    Ok(())
}

fn side_value(side: &[TradePlayer]) -> f64 {
    side.iter().map(|p| p.projected_points).sum()
}

// Receiving-minus-giving projected points, per position present on either
// side.
fn positional_impact(
    giving: &[TradePlayer],
    receiving: &[TradePlayer],
) -> BTreeMap<Position, f64> {
    let mut impact: BTreeMap<Position, f64> = BTreeMap::new();
    for player in receiving {
        *impact.entry(player.position).or_insert(0.0) += player.projected_points;
    }
    for player in giving {
        *impact.entry(player.position).or_insert(0.0) -= player.projected_points;
    }
    impact
}

fn build_recommendations(
    fairness: Fairness,
    value_gap: f64,
    positional_impact: &BTreeMap<Position, f64>,
    proposal: &TradeProposal,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    recommendations.push(match fairness {
        Fairness::Fair => {
            "Balanced trade: both sides exchange roughly equal projected value.".to_string()
        }
        Fairness::Favorable => format!(
            "Accept angle: you gain {:.1} projected points over the rest of the season.",
            value_gap
        ),
        Fairness::Unfavorable => format!(
            "Caution: you give up {:.1} more projected points than you receive.",
            -value_gap
        ),
    });

    // Largest-magnitude positional swing; BTreeMap order breaks ties.
    if let Some((position, impact)) = positional_impact
        .iter()
        .max_by(|a, b| {
            a.1.abs().partial_cmp(&b.1.abs()).unwrap_or(std::cmp::Ordering::Equal)
        })
    {
        recommendations.push(format!(
            "Biggest positional swing: {impact:+.1} projected points at {position}."
        ));
    }

    if proposal.giving.len() != proposal.receiving.len() {
        recommendations.push(format!(
            "Roster depth changes: trading {} players for {}.",
            proposal.giving.len(),
            proposal.receiving.len()
        ));
    }

    recommendations
}

// Confidence rises with the size of the gap and falls as the trade involves
// more players or lopsided side counts; a big gap between two players is a
// clearer call than a small gap across six.
fn confidence(value_gap: f64, proposal: &TradeProposal) -> f64 {
    let player_count = (proposal.giving.len() + proposal.receiving.len()) as f64;
    let asymmetry = (proposal.giving.len() as f64 - proposal.receiving.len() as f64).abs();

    let raw = 0.5 + (value_gap.abs() / 25.0).min(0.4)
        - 0.04 * (player_count - 2.0).max(0.0)
        - 0.05 * asymmetry;
    raw.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qb(id: &str, projected_points: f64) -> TradePlayer {
        player(id, Position::Qb, projected_points)
    }

    fn player(id: &str, position: Position, projected_points: f64) -> TradePlayer {
        TradePlayer {
            id: id.to_string(),
            name: format!("Player {id}"),
            position,
            team: None,
            projected_points,
            current_value: None,
        }
    }

    fn proposal(giving: Vec<TradePlayer>, receiving: Vec<TradePlayer>) -> TradeProposal {
        TradeProposal { giving, receiving }
    }

    #[test]
    fn near_even_qb_swap_is_fair() {
        let analysis =
            analyze_trade(&proposal(vec![qb("g", 25.5)], vec![qb("r", 26.2)])).unwrap();
        assert!((analysis.value_gap - 0.7).abs() < 1e-9);
        assert_eq!(analysis.fairness, Fairness::Fair);
        assert!((analysis.positional_impact[&Position::Qb] - 0.7).abs() < 1e-9);
    }

    #[test]
    fn ten_point_gain_is_favorable() {
        let analysis =
            analyze_trade(&proposal(vec![qb("g", 15.0)], vec![qb("r", 25.0)])).unwrap();
        assert_eq!(analysis.value_gap, 10.0);
        assert_eq!(analysis.fairness, Fairness::Favorable);
    }

    #[test]
    fn ten_point_loss_is_unfavorable() {
        let analysis =
            analyze_trade(&proposal(vec![qb("g", 25.0)], vec![qb("r", 15.0)])).unwrap();
        assert_eq!(analysis.value_gap, -10.0);
        assert_eq!(analysis.fairness, Fairness::Unfavorable);
    }

    #[test]
    fn gap_of_exactly_five_is_not_fair() {
        let analysis =
            analyze_trade(&proposal(vec![qb("g", 20.0)], vec![qb("r", 25.0)])).unwrap();
        assert_eq!(analysis.fairness, Fairness::Favorable);
        let analysis =
            analyze_trade(&proposal(vec![qb("g", 25.0)], vec![qb("r", 20.0)])).unwrap();
        assert_eq!(analysis.fairness, Fairness::Unfavorable);
    }

    #[test]
    fn positional_impact_covers_one_sided_positions() {
        let analysis = analyze_trade(&proposal(
            vec![player("g1", Position::Rb, 40.0), player("g2", Position::Wr, 30.0)],
            vec![player("r1", Position::Rb, 55.0), player("r2", Position::Te, 20.0)],
        ))
        .unwrap();
        assert_eq!(analysis.positional_impact[&Position::Rb], 15.0);
        assert_eq!(analysis.positional_impact[&Position::Wr], -30.0);
        assert_eq!(analysis.positional_impact[&Position::Te], 20.0);
    }

    #[test]
    fn recommendations_are_never_empty() {
        let analysis =
            analyze_trade(&proposal(vec![qb("g", 25.5)], vec![qb("r", 26.2)])).unwrap();
        assert!(!analysis.recommendations.is_empty());
        assert!(analysis.recommendations[0].contains("Balanced"));

        let analysis = analyze_trade(&proposal(
            vec![qb("g", 30.0)],
            vec![player("r1", Position::Rb, 12.0), player("r2", Position::Rb, 11.0)],
        ))
        .unwrap();
        assert!(analysis.recommendations.iter().any(|r| r.contains("Roster depth")));
    }

    #[test]
    fn empty_sides_are_rejected() {
        assert_eq!(
            analyze_trade(&proposal(vec![], vec![qb("r", 20.0)])).unwrap_err(),
            TradeError::EmptyGivingSide
        );
        assert_eq!(
            analyze_trade(&proposal(vec![qb("g", 20.0)], vec![])).unwrap_err(),
            TradeError::EmptyReceivingSide
        );
    }

    #[test]
    fn non_numeric_projections_are_rejected() {
        let err = analyze_trade(&proposal(
            vec![qb("g", f64::NAN)],
            vec![qb("r", 20.0)],
        ))
        .unwrap_err();
        assert!(matches!(err, TradeError::InvalidProjectedPoints { .. }));

        let err = analyze_trade(&proposal(
            vec![qb("g", 20.0)],
            vec![qb("r", f64::INFINITY)],
        ))
        .unwrap_err();
        assert!(matches!(err, TradeError::InvalidProjectedPoints { .. }));
    }

    #[test]
    fn confidence_bounded_and_favors_small_decisive_trades() {
        let decisive =
            analyze_trade(&proposal(vec![qb("g", 10.0)], vec![qb("r", 30.0)])).unwrap();
        let murky = analyze_trade(&proposal(
            vec![
                player("g1", Position::Rb, 20.0),
                player("g2", Position::Wr, 21.0),
                player("g3", Position::Te, 19.0),
            ],
            vec![
                player("r1", Position::Rb, 20.5),
                player("r2", Position::Wr, 20.0),
                player("r3", Position::Te, 21.0),
            ],
        ))
        .unwrap();
        assert!(decisive.confidence > murky.confidence);
        for analysis in [decisive, murky] {
            assert!((0.0..=1.0).contains(&analysis.confidence));
        }
    }
}
