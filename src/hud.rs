//! Read-outs derived from the flight state
//!
//! Everything a renderer needs for the instrument panel and the end-of-flight
//! overlays, computed without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::sim::{FlightState, GameOverReason};
use crate::tuning::Tuning;

/// Meters per second shown for one meter per tick of velocity
pub const SPEED_DISPLAY_FACTOR: f64 = 50.0;
/// Velocities within this band read as stable
pub const STABLE_VELOCITY: f64 = 0.05;
/// Peak altitude a landing needs before it counts as a flight
pub const MIN_LANDING_ALTITUDE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalTrend {
    Up,
    Down,
    Stable,
}

impl VerticalTrend {
    pub fn from_velocity(velocity: f64) -> Self {
        if velocity > STABLE_VELOCITY {
            VerticalTrend::Up
        } else if velocity < -STABLE_VELOCITY {
            VerticalTrend::Down
        } else {
            VerticalTrend::Stable
        }
    }
}

/// How close the balloon is to the ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AltitudeBand {
    Normal,
    Caution,
    Danger,
}

impl AltitudeBand {
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction > 0.85 {
            AltitudeBand::Danger
        } else if fraction > 0.65 {
            AltitudeBand::Caution
        } else {
            AltitudeBand::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelBand {
    Full,
    Low,
    Critical,
}

impl FuelBand {
    pub fn from_fuel(fuel: f64) -> Self {
        if fuel > 30.0 {
            FuelBand::Full
        } else if fuel > 10.0 {
            FuelBand::Low
        } else {
            FuelBand::Critical
        }
    }
}

/// Instrument panel values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudReadout {
    pub altitude_m: i64,
    /// Altitude as a fraction of the ceiling, capped at 1
    pub altitude_fraction: f64,
    pub altitude_band: AltitudeBand,
    pub vertical_speed_mps: f64,
    pub trend: VerticalTrend,
    pub air_temperature_c: i64,
    pub burner_percent: i64,
    pub fuel_percent: i64,
    pub fuel_band: FuelBand,
    pub sandbags: u32,
    pub max_sandbags: u32,
    pub flight_time_s: i64,
    /// Seconds left to lift off, only before the first liftoff
    pub countdown_s: Option<f64>,
    pub score: u64,
    pub best_score: u64,
}

impl HudReadout {
    pub fn from_state(state: &FlightState, best_score: u64, tuning: &Tuning) -> Self {
        let altitude_fraction = (state.altitude / tuning.screen_max_altitude).min(1.0);
        Self {
            altitude_m: state.altitude.round() as i64,
            altitude_fraction,
            altitude_band: AltitudeBand::from_fraction(altitude_fraction),
            vertical_speed_mps: (state.velocity * SPEED_DISPLAY_FACTOR).abs(),
            trend: VerticalTrend::from_velocity(state.velocity),
            air_temperature_c: state.air_temperature.round() as i64,
            burner_percent: state.burner_power.round() as i64,
            fuel_percent: state.fuel.round() as i64,
            fuel_band: FuelBand::from_fuel(state.fuel),
            sandbags: state.sandbags,
            max_sandbags: state.max_sandbags,
            flight_time_s: state.flight_time.round() as i64,
            countdown_s: (!state.has_lifted_off).then_some(state.countdown),
            score: state.score,
            best_score: best_score.max(state.score),
        }
    }
}

/// Centered overlay shown over the scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Overlay {
    None,
    GameOver {
        reason: GameOverReason,
        title: &'static str,
        subtitle: &'static str,
        max_altitude_m: i64,
    },
    SafeLanding {
        max_altitude_m: i64,
        flight_time_s: i64,
    },
}

impl Overlay {
    pub fn from_state(state: &FlightState) -> Self {
        if let Some(reason) = state.game_over_reason {
            let (title, subtitle) = game_over_text(reason);
            return Overlay::GameOver {
                reason,
                title,
                subtitle,
                max_altitude_m: state.max_altitude.round() as i64,
            };
        }

        if state.is_landed && state.has_lifted_off && state.max_altitude > MIN_LANDING_ALTITUDE {
            return Overlay::SafeLanding {
                max_altitude_m: state.max_altitude.round() as i64,
                flight_time_s: state.flight_time.round() as i64,
            };
        }

        Overlay::None
    }
}

/// Title and subtitle for an ended episode
pub fn game_over_text(reason: GameOverReason) -> (&'static str, &'static str) {
    match reason {
        GameOverReason::Crash => ("Crash Landing!", "You descended too fast."),
        GameOverReason::TooHigh => (
            "Lost in the Stratosphere!",
            "You flew too high and escaped the screen.",
        ),
        GameOverReason::Timeout => (
            "Failed to Launch!",
            "The countdown ran out before takeoff.",
        ),
    }
}
