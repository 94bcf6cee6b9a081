//! Validation errors for trade proposals.

use thiserror::Error;

/// Errors that can occur validating a trade proposal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    #[error("giving side of the trade has no players")]
    EmptyGivingSide,

    #[error("receiving side of the trade has no players")]
    EmptyReceivingSide,

    #[error("player '{player}' has invalid projected points")]
    InvalidProjectedPoints { player: String },
}
