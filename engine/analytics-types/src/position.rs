//! Fantasy-relevant NFL positions.
//!
//! Positions are a closed enum rather than free-form strings so every
//! position-gated calculator branches over a compile-time-checked set and
//! keeps its parameters in an explicit per-position lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six core fantasy positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Qb,
    #[serde(rename = "RB")]
    Rb,
    #[serde(rename = "WR")]
    Wr,
    #[serde(rename = "TE")]
    Te,
    #[serde(rename = "K")]
    K,
    /// Team defense / special teams. Some feeds abbreviate this "DEF".
    #[serde(rename = "DST", alias = "DEF")]
    Dst,
}

impl Position {
    /// All six core positions in canonical order.
    pub const CORE: [Position; 6] =
        [Position::Qb, Position::Rb, Position::Wr, Position::Te, Position::K, Position::Dst];

    /// Wire name, e.g. "QB".
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::K => "K",
            Position::Dst => "DST",
        }
    }

    /// WR and TE run routes and compete for targets.
    pub fn is_pass_catcher(&self) -> bool {
        matches!(self, Position::Wr | Position::Te)
    }

    /// K and DST participate in every one of their units' snaps.
    pub fn is_special(&self) -> bool {
        matches!(self, Position::K | Position::Dst)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized position string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(pub String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown position: {}", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::Qb),
            "RB" => Ok(Position::Rb),
            "WR" => Ok(Position::Wr),
            "TE" => Ok(Position::Te),
            "K" => Ok(Position::K),
            "DST" | "DEF" => Ok(Position::Dst),
            other => Err(ParsePositionError(other.to_string())),
        }
    }
}
