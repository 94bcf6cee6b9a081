//! # Trade Valuation
//!
//! Values multi-player trade proposals by comparing aggregated projected
//! points on each side. Unlike the analytics calculators, trade input is a
//! user-authored transaction: malformed proposals are rejected with a
//! structured [`TradeError`] instead of being silently defaulted.

pub mod engine;
pub mod error;

pub use engine::analyze_trade;
pub use error::TradeError;
