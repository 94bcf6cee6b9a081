//! Trade proposal and analysis records.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One player's worth of value inside a trade proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePlayer {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub team: Option<String>,
    /// Rest-of-season projected fantasy points; the unit of trade value.
    pub projected_points: f64,
    /// Market value from the roster screen, carried through but unused by
    /// the valuation math.
    #[serde(default)]
    pub current_value: Option<f64>,
}

/// A user-authored trade: what they give up and what they get back.
///
/// Both sides must be non-empty; this is validated, not defaulted, because
/// a silently zero-valued side would misrepresent a real transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeProposal {
    pub giving: Vec<TradePlayer>,
    pub receiving: Vec<TradePlayer>,
}

/// Fairness classification of a trade from the proposing side's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fairness {
    Fair,
    /// The receiving side carries meaningfully more value.
    Favorable,
    /// The giving side carries meaningfully more value.
    Unfavorable,
}

/// Derived valuation of a trade proposal. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeAnalysis {
    /// Sum of projected points on the giving side.
    pub giving_value: f64,
    /// Sum of projected points on the receiving side.
    pub receiving_value: f64,
    /// `receiving_value - giving_value`.
    pub value_gap: f64,
    pub fairness: Fairness,
    /// Per-position receiving-minus-giving projected points.
    pub positional_impact: BTreeMap<Position, f64>,
    /// Human-readable guidance; always non-empty.
    pub recommendations: Vec<String>,
    /// Confidence in the classification, in [0, 1].
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fairness_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Fairness::Fair).unwrap(), "\"fair\"");
        assert_eq!(
            serde_json::to_string(&Fairness::Unfavorable).unwrap(),
            "\"unfavorable\""
        );
    }

    #[test]
    fn proposal_round_trips_through_json() {
        let json = r#"{
            "giving": [
                {"id": "g1", "name": "QB One", "position": "QB", "projectedPoints": 25.5}
            ],
            "receiving": [
                {"id": "r1", "name": "QB Two", "position": "QB", "projectedPoints": 26.2}
            ]
        }"#;
        let proposal: TradeProposal = serde_json::from_str(json).unwrap();
        assert_eq!(proposal.giving.len(), 1);
        assert_eq!(proposal.receiving[0].projected_points, 26.2);
        assert!(proposal.giving[0].current_value.is_none());
    }
}
