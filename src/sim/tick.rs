//! Per-frame simulation step
//!
//! Composes the thermal model, the force model, the lifecycle checks and
//! the scoring engine into one atomic update. The previous state is never
//! touched; every step returns a new value.

use serde::{Deserialize, Serialize};

use super::flight::{advance_countdown, record_flight, resolve_contact};
use super::forces::integrate_motion;
use super::scoring::{ScoreAward, score_tick};
use super::state::FlightState;
use super::thermal::update_temperature;
use crate::tuning::Tuning;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Burner change this tick (percent), e.g. `3 * dt` while burn is held
    pub burner_delta: f64,
    /// Sandbags added (+) or dropped (-) since the last tick
    pub sandbag_delta: i32,
}

impl TickInput {
    /// Input for a tick with the burn control held down
    pub fn burning(dt: f64, tuning: &Tuning) -> Self {
        Self {
            burner_delta: tuning.burner_ramp_per_tick * dt,
            sandbag_delta: 0,
        }
    }
}

/// Result of one step
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    pub state: FlightState,
    /// Points awarded this tick, in award order
    pub awards: Vec<ScoreAward>,
}

/// Advance the flight by one tick with the reference tuning
pub fn step(prev: &FlightState, dt: f64, input: &TickInput) -> FlightState {
    step_with(prev, dt, input, &Tuning::default()).state
}

/// Advance the flight by one tick.
///
/// A finished episode is frozen: the same state comes back for any dt and
/// input until the host resets.
pub fn step_with(prev: &FlightState, dt: f64, input: &TickInput, tuning: &Tuning) -> StepOutput {
    if prev.is_game_over() {
        return StepOutput {
            state: prev.clone(),
            awards: Vec::new(),
        };
    }

    let dt = sanitize_dt(dt, tuning);
    let current_tick = prev.tick;

    let mut next = prev.clone();
    next.tick = current_tick.saturating_add(1);

    if advance_countdown(&mut next, dt, tuning) {
        return StepOutput {
            state: next,
            awards: Vec::new(),
        };
    }

    next.sandbags = fold_sandbags(prev.sandbags, input.sandbag_delta, prev.max_sandbags);

    if next.fuel > 0.0 && input.burner_delta.is_finite() {
        next.burner_power = (next.burner_power + input.burner_delta).clamp(0.0, 100.0);
    }

    let thermal = update_temperature(
        next.air_temperature,
        next.burner_power,
        next.fuel,
        dt,
        tuning,
    );
    next.air_temperature = thermal.air_temperature;
    next.fuel = thermal.fuel;
    next.burner_power = thermal.burner_power;

    let (altitude, velocity) = integrate_motion(
        next.altitude,
        next.velocity,
        next.air_temperature,
        next.sandbags,
        dt,
        tuning,
    );
    next.altitude = altitude;
    next.velocity = velocity;

    if resolve_contact(&mut next, tuning).is_some() {
        return StepOutput {
            state: next,
            awards: Vec::new(),
        };
    }

    record_flight(&mut next, dt, tuning);
    let awards = score_tick(&mut next, dt, current_tick, tuning);

    StepOutput {
        state: next,
        awards,
    }
}

/// Clamp dt into `[0, max_frame_dt]`; non-finite values count as no time
fn sanitize_dt(dt: f64, tuning: &Tuning) -> f64 {
    if dt.is_finite() {
        dt.clamp(0.0, tuning.max_frame_dt)
    } else {
        0.0
    }
}

fn fold_sandbags(sandbags: u32, delta: i32, max_sandbags: u32) -> u32 {
    let bags = i64::from(sandbags) + i64::from(delta);
    bags.clamp(0, i64::from(max_sandbags)) as u32
}
