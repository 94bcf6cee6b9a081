//! Configuration for the analytics service.

use serde::{Deserialize, Serialize};

/// Main configuration for the analytics service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalyticsConfig {
    /// Breakout query configuration
    pub breakout: BreakoutConfig,
    /// Schedule analyzer configuration
    pub schedule: ScheduleConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Breakout query configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakoutConfig {
    /// Candidates at or below this probability are dropped
    pub probability_floor: f64,
    /// Default number of candidates returned when the caller gives no limit
    pub default_limit: usize,
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self { probability_floor: 45.0, default_limit: 10 }
    }
}

/// Schedule analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Upcoming weeks in the near-term matchup window
    pub near_term_weeks: usize,
    /// Season length in weeks, capped at the 18-week league year
    pub season_weeks: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { near_term_weeks: 3, season_weeks: 18 }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter for the CLI binary
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &str) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: AnalyticsConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &str) -> Result<(), anyhow::Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.breakout.probability_floor, 45.0);
        assert_eq!(config.breakout.default_limit, 10);
        assert_eq!(config.schedule.near_term_weeks, 3);
        assert_eq!(config.schedule.season_weeks, 18);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = AnalyticsConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AnalyticsConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.breakout.default_limit, config.breakout.default_limit);
        assert_eq!(parsed.schedule.near_term_weeks, config.schedule.near_term_weeks);
        assert_eq!(parsed.schedule.season_weeks, config.schedule.season_weeks);
        assert_eq!(parsed.logging.level, config.logging.level);
    }
}
