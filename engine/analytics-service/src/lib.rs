//! # Analytics Service
//!
//! Composition root for the player analytics and trade valuation engine.
//! Owns the schedule analyzer (and with it the only mutable state, the
//! memoization cache) and exposes the plain-data operations the API layer
//! consumes: player enrichment, breakout queries, schedule/SOS queries, and
//! trade analysis.

pub mod cli;
pub mod config;
pub mod service;

pub use config::{AnalyticsConfig, BreakoutConfig, ScheduleConfig};
pub use service::{AnalyticsService, EnrichmentReport};
