//! Balloon Flight - a hot-air balloon flight simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (thermal, forces, flight state, scoring)
//! - `tuning`: Data-driven physics and scoring balance
//! - `session`: Host-side frame driver (timing, held burner, resets)
//! - `hud`: Read-outs derived from the flight state for a renderer
//! - `highscores`: Best scores of the current run
//! - `persistence`: Versioned JSON snapshots

pub mod error;
pub mod highscores;
pub mod hud;
pub mod persistence;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use highscores::HighScores;
pub use session::Session;
pub use sim::{FlightState, GameOverReason, TickInput, step, step_with};
pub use tuning::Tuning;

/// Reference tuning constants
pub mod consts {
    /// Constant downward acceleration per tick
    pub const GRAVITY: f64 = 0.015;
    /// Upward acceleration per degree above ambient per tick
    pub const BUOYANCY_FACTOR: f64 = 0.00035;
    /// Per-tick velocity retention (exponentiated by dt)
    pub const DRAG: f64 = 0.995;
    /// Envelope cooling toward ambient, degrees per tick
    pub const AIR_COOLING_RATE: f64 = 0.15;
    /// Envelope heating at full burner, degrees per tick
    pub const BURNER_HEAT_RATE: f64 = 0.8;
    pub const AMBIENT_TEMP: f64 = 20.0;
    pub const MAX_TEMP: f64 = 200.0;
    /// Fuel percent burned per tick at full burner
    pub const FUEL_CONSUMPTION_RATE: f64 = 0.03;
    pub const MAX_FUEL: f64 = 100.0;
    /// Downward acceleration per carried sandbag per tick
    pub const SANDBAG_WEIGHT: f64 = 0.008;
    /// Top of the playable range; reaching it ends the episode
    pub const SCREEN_MAX_ALTITUDE: f64 = 800.0;
    /// Fastest touchdown (meters/tick) that still counts as a landing
    pub const SAFE_LANDING_SPEED: f64 = 0.8;
    pub const GROUND_LEVEL: f64 = 0.0;
    /// Seconds the player has to lift off
    pub const COUNTDOWN_SECONDS: f64 = 30.0;

    /// Scoring lines
    pub const MOUNTAIN_LINE_ALTITUDE: f64 = 100.0;
    pub const MIDDLE_LINE_ALTITUDE: f64 = 400.0;
    pub const TIME_SCORE_POINTS: u64 = 1;
    /// Seconds of airtime per time award
    pub const TIME_SCORE_INTERVAL: f64 = 5.0;
    pub const MOUNTAIN_CROSS_SCORE: u64 = 10;
    pub const MIDDLE_CROSS_SCORE: u64 = 5;
    /// Ticks a score popup stays visible
    pub const POPUP_LIFETIME_TICKS: u64 = 90;

    /// Ballast at episode start
    pub const START_SANDBAGS: u32 = 4;
    pub const MAX_SANDBAGS: u32 = 6;
    /// Burner ramp per tick while the burn control is held
    pub const BURNER_RAMP_PER_TICK: f64 = 3.0;

    /// Nominal simulation rate
    pub const TICKS_PER_SECOND: f64 = 60.0;
    /// Nominal frame duration in milliseconds
    pub const FRAME_MS: f64 = 16.67;
    /// Largest dt accepted for one step (long frame stalls)
    pub const MAX_FRAME_DT: f64 = 3.0;
}

/// Convert real elapsed milliseconds into a dt multiplier.
///
/// 1.0 at the nominal frame rate, capped at [`consts::MAX_FRAME_DT`].
#[inline]
pub fn frame_dt(elapsed_ms: f64) -> f64 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0.0;
    }
    (elapsed_ms / consts::FRAME_MS).min(consts::MAX_FRAME_DT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dt_nominal() {
        assert!((frame_dt(consts::FRAME_MS) - 1.0).abs() < 1e-12);
        assert!((frame_dt(consts::FRAME_MS / 2.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_frame_dt_capped_on_stall() {
        assert_eq!(frame_dt(5_000.0), consts::MAX_FRAME_DT);
    }

    #[test]
    fn test_frame_dt_rejects_backwards_time() {
        assert_eq!(frame_dt(-4.0), 0.0);
        assert_eq!(frame_dt(f64::NAN), 0.0);
    }
}
