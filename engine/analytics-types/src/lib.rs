//! # Analytics Types
//!
//! Shared plain-data model for the player analytics and trade valuation
//! engine. Every record here is JSON-serializable and owned by value; the
//! engine never mutates its inputs, it returns new enriched copies.

pub mod breakout;
pub mod numeric;
pub mod player;
pub mod position;
pub mod schedule;
pub mod trade;

pub use breakout::{BreakoutPrediction, Impact, KeyFactor, RecommendedAction, Timeframe};
pub use player::{EnrichedPlayer, Opportunity, PlayerSnapshot, Trend};
pub use position::Position;
pub use schedule::{MatchupRating, PlayerSchedule, ScheduleEntry, TeamSos};
pub use trade::{Fairness, TradeAnalysis, TradePlayer, TradeProposal};
