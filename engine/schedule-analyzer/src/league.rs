//! Static league data and the deterministic difficulty model.
//!
//! Matchup difficulty comes from a fixed defensive-tier table per team,
//! adjusted per position and wobbled by a deterministic week term. No
//! randomness anywhere: the same `(team, opponent, position, week)` always
//! produces the same difficulty, which is what makes memoization safe.

use analytics_types::Position;

/// Length of the regular season in weeks.
pub const SEASON_WEEKS: u32 = 18;

/// Number of teams in the league.
pub const TEAM_COUNT: usize = 32;

/// One team's static entry: abbreviation, full name, defensive tier.
///
/// The tier is a season-prior estimate of overall defensive strength in
/// [0, 1]; higher means a tougher matchup for opposing players.
pub struct TeamEntry {
    pub abbr: &'static str,
    pub name: &'static str,
    pub defense: f64,
}

/// The 32-team league table, alphabetical by abbreviation. Table order is
/// the tie-break order for SOS rankings.
pub const LEAGUE: [TeamEntry; TEAM_COUNT] = [
    TeamEntry { abbr: "ARI", name: "Arizona Cardinals", defense: 0.38 },
    TeamEntry { abbr: "ATL", name: "Atlanta Falcons", defense: 0.44 },
    TeamEntry { abbr: "BAL", name: "Baltimore Ravens", defense: 0.82 },
    TeamEntry { abbr: "BUF", name: "Buffalo Bills", defense: 0.74 },
    TeamEntry { abbr: "CAR", name: "Carolina Panthers", defense: 0.25 },
    TeamEntry { abbr: "CHI", name: "Chicago Bears", defense: 0.52 },
    TeamEntry { abbr: "CIN", name: "Cincinnati Bengals", defense: 0.48 },
    TeamEntry { abbr: "CLE", name: "Cleveland Browns", defense: 0.70 },
    TeamEntry { abbr: "DAL", name: "Dallas Cowboys", defense: 0.58 },
    TeamEntry { abbr: "DEN", name: "Denver Broncos", defense: 0.66 },
    TeamEntry { abbr: "DET", name: "Detroit Lions", defense: 0.50 },
    TeamEntry { abbr: "GB", name: "Green Bay Packers", defense: 0.56 },
    TeamEntry { abbr: "HOU", name: "Houston Texans", defense: 0.62 },
    TeamEntry { abbr: "IND", name: "Indianapolis Colts", defense: 0.42 },
    TeamEntry { abbr: "JAX", name: "Jacksonville Jaguars", defense: 0.34 },
    TeamEntry { abbr: "KC", name: "Kansas City Chiefs", defense: 0.64 },
    TeamEntry { abbr: "LAC", name: "Los Angeles Chargers", defense: 0.60 },
    TeamEntry { abbr: "LAR", name: "Los Angeles Rams", defense: 0.46 },
    TeamEntry { abbr: "LV", name: "Las Vegas Raiders", defense: 0.30 },
    TeamEntry { abbr: "MIA", name: "Miami Dolphins", defense: 0.45 },
    TeamEntry { abbr: "MIN", name: "Minnesota Vikings", defense: 0.68 },
    TeamEntry { abbr: "NE", name: "New England Patriots", defense: 0.40 },
    TeamEntry { abbr: "NO", name: "New Orleans Saints", defense: 0.54 },
    TeamEntry { abbr: "NYG", name: "New York Giants", defense: 0.36 },
    TeamEntry { abbr: "NYJ", name: "New York Jets", defense: 0.72 },
    TeamEntry { abbr: "PHI", name: "Philadelphia Eagles", defense: 0.65 },
    TeamEntry { abbr: "PIT", name: "Pittsburgh Steelers", defense: 0.76 },
    TeamEntry { abbr: "SEA", name: "Seattle Seahawks", defense: 0.49 },
    TeamEntry { abbr: "SF", name: "San Francisco 49ers", defense: 0.71 },
    TeamEntry { abbr: "TB", name: "Tampa Bay Buccaneers", defense: 0.55 },
    TeamEntry { abbr: "TEN", name: "Tennessee Titans", defense: 0.32 },
    TeamEntry { abbr: "WAS", name: "Washington Commanders", defense: 0.41 },
];

/// Look up a team's index in the league table by abbreviation.
pub fn team_index(abbr: &str) -> Option<usize> {
    LEAGUE.iter().position(|t| t.abbr.eq_ignore_ascii_case(abbr.trim()))
}

// How much harder or easier a defense plays against each position, relative
// to its overall tier.
fn position_adjustment(position: Position) -> f64 {
    match position {
        Position::Qb => 0.0,
        Position::Rb => 0.05,
        Position::Wr => 0.02,
        Position::Te => -0.03,
        Position::K => -0.10,
        Position::Dst => -0.05,
    }
}

/// Deterministic opponent for a team in a given week.
///
/// A simple rotation over the other 31 teams; the offset never lands a team
/// on itself.
pub fn opponent_index(team_idx: usize, week: u32) -> usize {
    let offset = (week as usize * 5 + 3) % (TEAM_COUNT - 1);
    (team_idx + offset + 1) % TEAM_COUNT
}

/// Matchup difficulty in [0, 1] when facing `opponent_idx` at `position`
/// in `week`.
pub fn difficulty(opponent_idx: usize, position: Position, week: u32) -> f64 {
    let base = LEAGUE[opponent_idx].defense + position_adjustment(position);
    // Small deterministic week-to-week wobble, roughly +/- 0.05.
    let wobble = ((week as usize * 7 + opponent_idx * 3) % 11) as f64 / 100.0 - 0.05;
    (base + wobble).clamp(0.0, 1.0)
}

/// Opponent's rank (1 = toughest) against `position` in `week` among all
/// 32 teams; unique, with ties broken by table order.
pub fn position_rank(opponent_idx: usize, position: Position, week: u32) -> u32 {
    let mine = difficulty(opponent_idx, position, week);
    let mut rank = 1;
    for idx in 0..TEAM_COUNT {
        if idx == opponent_idx {
            continue;
        }
        let theirs = difficulty(idx, position, week);
        if theirs > mine || (theirs == mine && idx < opponent_idx) {
            rank += 1;
        }
    }
    rank
}
