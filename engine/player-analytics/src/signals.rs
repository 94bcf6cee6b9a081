//! Position-gated usage signals estimated from season production.
//!
//! Each calculator looks up per-position ramp parameters in a table and
//! applies a saturating linear ramp: `floor + span * min(points / cap, 1)`.
//! The ramp is non-decreasing in points by construction, so higher recent
//! production can never yield a lower opportunity signal.
//!
//! When a feed already supplies a signal (target share, snap count,
//! red-zone targets on the snapshot) and the value is finite, that value
//! wins over the estimate.

use analytics_types::numeric::safe_f64;
use analytics_types::{PlayerSnapshot, Position};

/// Saturating linear ramp parameters for one position.
#[derive(Debug, Clone, Copy)]
struct Ramp {
    floor: f64,
    ceiling: f64,
    /// Points at which the ramp saturates at `ceiling`.
    cap: f64,
}

impl Ramp {
    const fn new(floor: f64, ceiling: f64, cap: f64) -> Self {
        Self { floor, ceiling, cap }
    }

    fn apply(&self, points: f64) -> f64 {
        let p = safe_f64(points, 0.0).max(0.0);
        self.floor + (self.ceiling - self.floor) * (p / self.cap).min(1.0)
    }
}

// Every pass-catcher keeps at least an 8% floor; depth players still see
// some looks. Band tops out at 35%.
fn target_share_ramp(position: Position) -> Option<Ramp> {
    match position {
        Position::Wr => Some(Ramp::new(8.0, 35.0, 220.0)),
        Position::Te => Some(Ramp::new(8.0, 30.0, 180.0)),
        _ => None,
    }
}

// K and DST are handled separately (fixed 100). QB sits on its own curve:
// even a benched QB registers garbage-time snaps, hence the higher floor.
fn snap_ramp(position: Position) -> Ramp {
    match position {
        Position::Qb => Ramp::new(32.0, 95.0, 330.0),
        Position::Rb => Ramp::new(15.0, 95.0, 280.0),
        Position::Wr => Ramp::new(15.0, 95.0, 260.0),
        Position::Te => Ramp::new(15.0, 95.0, 240.0),
        // Unreachable through the public API.
        Position::K | Position::Dst => Ramp::new(100.0, 100.0, 1.0),
    }
}

// A starting QB always has red-zone opportunities via called plays, hence
// the floor of 3. Kickers and defenses have no red-zone target concept.
fn red_zone_ramp(position: Position) -> Option<Ramp> {
    match position {
        Position::Wr => Some(Ramp::new(0.0, 12.0, 250.0)),
        Position::Te => Some(Ramp::new(0.0, 10.0, 220.0)),
        Position::Rb => Some(Ramp::new(0.0, 8.0, 260.0)),
        Position::Qb => Some(Ramp::new(3.0, 8.0, 300.0)),
        Position::K | Position::Dst => None,
    }
}

/// Estimated share of team passing targets, in the 8-35 band.
///
/// Defined only for WR and TE.
pub fn target_share(player: &PlayerSnapshot) -> Option<f64> {
    let ramp = target_share_ramp(player.position)?;
    if let Some(known) = player.target_share.filter(|v| v.is_finite()) {
        return Some(known);
    }
    Some(ramp.apply(player.fantasy_points_to_date))
}

/// Estimated snap share percentage.
///
/// Defined for all positions. K and DST are fixed at 100: they play every
/// kicking/defensive snap by construction.
pub fn snap_count(player: &PlayerSnapshot) -> Option<f64> {
    if player.position.is_special() {
        return Some(100.0);
    }
    if let Some(known) = player.snap_count.filter(|v| v.is_finite()) {
        return Some(known);
    }
    Some(snap_ramp(player.position).apply(player.fantasy_points_to_date))
}

/// Estimated red-zone targets (or, for QBs, red-zone opportunities).
///
/// WR/TE/RB scale up from zero; QB has a floor of 3; K and DST are always 0.
pub fn red_zone_targets(player: &PlayerSnapshot) -> Option<f64> {
    let Some(ramp) = red_zone_ramp(player.position) else {
        return Some(0.0);
    };
    if let Some(known) = player.red_zone_targets.filter(|v| v.is_finite()) {
        return Some(known);
    }
    Some(ramp.apply(player.fantasy_points_to_date))
}

// Route participation tracks snap share closely for receivers.
const ROUTES_PER_SNAP_POINT: f64 = 0.38;

/// Estimated routes run per game, derived from snap share.
///
/// Defined only for WR and TE.
pub fn routes_run(player: &PlayerSnapshot) -> Option<f64> {
    if !player.position.is_pass_catcher() {
        return None;
    }
    snap_count(player).map(|snaps| snaps * ROUTES_PER_SNAP_POINT)
}

/// Estimated yards per route run, with a 0.8 floor regardless of production.
///
/// Defined only for WR and TE.
pub fn yards_per_route(player: &PlayerSnapshot) -> Option<f64> {
    let ramp = match player.position {
        Position::Wr => Ramp::new(0.8, 2.6, 250.0),
        Position::Te => Ramp::new(0.8, 2.2, 220.0),
        _ => return None,
    };
    Some(ramp.apply(player.fantasy_points_to_date))
}
