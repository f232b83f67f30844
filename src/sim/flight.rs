//! Flight lifecycle transitions
//!
//! Checked in a fixed order each tick, first match wins: countdown
//! timeout, escape through the top, ground contact, otherwise airborne.

use super::state::{FlightState, GameOverReason};
use crate::tuning::Tuning;

/// Run the pre-liftoff countdown. Returns `true` if it just ran out, in
/// which case the state has been ended with [`GameOverReason::Timeout`].
pub fn advance_countdown(state: &mut FlightState, dt: f64, tuning: &Tuning) -> bool {
    if state.has_lifted_off {
        return false;
    }

    state.countdown -= tuning.seconds(dt);
    if state.countdown <= 0.0 {
        state.countdown = 0.0;
        state.game_over_reason = Some(GameOverReason::Timeout);
        log::debug!("Countdown expired at tick {}", state.tick);
        return true;
    }
    false
}

/// Resolve escape and ground contact after motion has been integrated.
///
/// `state.is_landed` must still hold the previous tick's value. Returns the
/// terminal reason if the episode ended this tick.
pub fn resolve_contact(state: &mut FlightState, tuning: &Tuning) -> Option<GameOverReason> {
    if state.altitude >= tuning.screen_max_altitude {
        state.altitude = tuning.screen_max_altitude;
        state.velocity = 0.0;
        state.burner_power = 0.0;
        state.is_landed = false;
        state.has_lifted_off = true;
        state.max_altitude = state.max_altitude.max(tuning.screen_max_altitude);
        state.game_over_reason = Some(GameOverReason::TooHigh);
        return state.game_over_reason;
    }

    if state.altitude <= tuning.ground_level {
        state.altitude = tuning.ground_level;
        let was_flying = !state.is_landed;

        if was_flying && state.velocity.abs() > tuning.safe_landing_speed {
            log::debug!("Crash at {:.3} m/tick", state.velocity);
            state.velocity = 0.0;
            state.burner_power = 0.0;
            state.is_landed = true;
            state.game_over_reason = Some(GameOverReason::Crash);
            return state.game_over_reason;
        }

        state.velocity = 0.0;
        state.is_landed = true;
    } else {
        state.is_landed = false;
        if !state.has_lifted_off {
            log::debug!("Liftoff at tick {}", state.tick);
            state.has_lifted_off = true;
        }
    }

    None
}

/// Track peak altitude and airtime for a tick that did not end the episode
pub fn record_flight(state: &mut FlightState, dt: f64, tuning: &Tuning) {
    state.max_altitude = state.max_altitude.max(state.altitude);
    if !state.is_landed {
        state.flight_time += tuning.seconds(dt);
    }
}
