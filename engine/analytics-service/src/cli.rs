//! Command line interface for running engine queries against JSON files.

use crate::config::AnalyticsConfig;
use crate::service::AnalyticsService;
use analytics_types::{PlayerSnapshot, Position, TradeProposal};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Player analytics CLI: enrichment, breakout, schedule/SOS, and trade
/// valuation over JSON input files.
#[derive(Parser)]
#[command(name = "analytics-cli")]
#[command(about = "Player analytics and trade valuation queries")]
pub struct Cli {
    /// Optional TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich a JSON file of player snapshots
    Enrich {
        /// Path to a JSON array of player snapshots
        players: PathBuf,
        /// Current NFL week
        #[arg(long, default_value = "1")]
        week: u32,
    },
    /// Rank breakout candidates from a player pool
    Breakout {
        /// Path to a JSON array of player snapshots
        players: PathBuf,
        /// Current NFL week
        #[arg(long, default_value = "1")]
        week: u32,
        /// Maximum candidates to return
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Analyze a trade proposal
    Trade {
        /// Path to a JSON trade proposal ({"giving": [...], "receiving": [...]})
        proposal: PathBuf,
    },
    /// Show a player's upcoming schedule
    Schedule {
        /// Player identifier
        player_id: String,
        /// Player display name
        name: String,
        /// Team abbreviation, e.g. KC
        team: String,
        /// Position, e.g. WR
        position: String,
        /// Current NFL week
        #[arg(long, default_value = "1")]
        week: u32,
    },
    /// Show a team's strength of schedule
    Sos {
        /// Team abbreviation, e.g. KC
        team: String,
        /// Current NFL week
        #[arg(long, default_value = "1")]
        week: u32,
    },
    /// Show league-wide SOS against one position
    PositionSos {
        /// Position, e.g. WR
        position: String,
        /// Current NFL week
        #[arg(long, default_value = "1")]
        week: u32,
    },
}

/// CLI handler
pub struct CliHandler {
    service: AnalyticsService,
    log_level: String,
}

impl CliHandler {
    /// Create a handler, loading config from file when given.
    pub fn new(config_path: Option<&PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => AnalyticsConfig::load_from_file(
                path.to_str().context("config path is not valid UTF-8")?,
            )?,
            None => AnalyticsConfig::default(),
        };
        let log_level = config.logging.level.clone();
        Ok(Self { service: AnalyticsService::new(config), log_level })
    }

    /// Configured log level filter, used to initialize the subscriber.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Handle CLI commands
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Enrich { players, week } => {
                let pool = read_players(&players)?;
                let report = self.service.enrich_players(&pool, week);
                print_json(&report)
            }
            Commands::Breakout { players, week, limit } => {
                let pool = read_players(&players)?;
                let candidates = self.service.breakout_candidates(&pool, week, limit);
                print_json(&candidates)
            }
            Commands::Trade { proposal } => {
                let content = std::fs::read_to_string(&proposal)
                    .with_context(|| format!("reading {}", proposal.display()))?;
                let proposal: TradeProposal = serde_json::from_str(&content)?;
                let analysis = self.service.analyze_trade(&proposal)?;
                print_json(&analysis)
            }
            Commands::Schedule { player_id, name, team, position, week } => {
                let position: Position =
                    position.parse().map_err(|e| anyhow::anyhow!("{e}"))?;
                let schedule =
                    self.service.player_schedule(&player_id, &name, &team, position, week)?;
                print_json(&*schedule)
            }
            Commands::Sos { team, week } => {
                let sos = self.service.team_sos(&team, &team, week)?;
                print_json(&*sos)
            }
            Commands::PositionSos { position, week } => {
                let position: Position =
                    position.parse().map_err(|e| anyhow::anyhow!("{e}"))?;
                let map = self.service.position_sos(position, week);
                print_json(&map)
            }
        }
    }
}

fn read_players(path: &PathBuf) -> Result<Vec<PlayerSnapshot>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let players: Vec<PlayerSnapshot> =
        serde_json::from_str(&content).context("parsing player snapshots")?;
    Ok(players)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_subcommand_parses() {
        let cli = Cli::try_parse_from([
            "analytics-cli",
            "schedule",
            "p1",
            "Test Player",
            "KC",
            "WR",
            "--week",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Schedule { player_id, name, team, position, week } => {
                assert_eq!(player_id, "p1");
                assert_eq!(name, "Test Player");
                assert_eq!(team, "KC");
                assert_eq!(position, "WR");
                assert_eq!(week, 5);
            }
            _ => panic!("expected the schedule subcommand"),
        }
    }

    #[test]
    fn schedule_command_reaches_the_analyzer() {
        let handler = CliHandler::new(None).unwrap();
        handler
            .handle_command(Commands::Schedule {
                player_id: "p1".to_string(),
                name: "Test Player".to_string(),
                team: "KC".to_string(),
                position: "WR".to_string(),
                week: 5,
            })
            .unwrap();
    }

    #[test]
    fn schedule_command_rejects_a_bad_position() {
        let handler = CliHandler::new(None).unwrap();
        let err = handler
            .handle_command(Commands::Schedule {
                player_id: "p1".to_string(),
                name: "Test Player".to_string(),
                team: "KC".to_string(),
                position: "XX".to_string(),
                week: 5,
            })
            .unwrap_err();
        assert!(err.to_string().contains("XX"));
    }
}
