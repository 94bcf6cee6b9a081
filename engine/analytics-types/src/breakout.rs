//! Breakout prediction records.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Whether a factor pushes a player toward or away from a breakout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Impact {
    Positive,
    Negative,
}

/// One named contribution to a breakout score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFactor {
    pub factor: String,
    pub impact: Impact,
    /// Magnitude of the contribution in score points.
    pub weight: f64,
}

/// How soon a breakout is expected, if one is coming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Timeframe {
    Immediate,
    ShortTerm,
    LongTerm,
}

/// Suggested roster move for a breakout candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendedAction {
    AddNow,
    Monitor,
    Wait,
    Pass,
}

/// Full output of the breakout predictor for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakoutPrediction {
    pub player_id: String,
    pub player_name: String,
    pub position: Position,
    /// Weighted four-factor score in [0, 100].
    pub breakout_score: f64,
    /// Position-adjusted probability in [0, 100].
    pub breakout_probability: f64,
    /// Prediction confidence in [0, 100].
    pub confidence: f64,
    /// Every contributing factor, in factor-model order.
    pub key_factors: Vec<KeyFactor>,
    pub timeframe: Timeframe,
    pub reasoning: String,
    pub recommended_action: RecommendedAction,
}
