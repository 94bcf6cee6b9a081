//! # Breakout Predictor
//!
//! A purely functional four-factor breakout model: opportunity (35%),
//! efficiency (30%), situation (20%), and schedule (15%) sub-scores combine
//! into a breakout score, which a per-position multiplier turns into a
//! probability. All weights live in declarative tables in [`weights`] so
//! they can be tuned and tested independently of the combination logic.

pub mod factors;
pub mod predictor;
pub mod weights;

pub use factors::{
    efficiency_factor, opportunity_factor, schedule_factor, situation_factor, FactorScore,
};
pub use predictor::{find_breakout_candidates, predict_breakout};
