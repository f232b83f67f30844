//! Discrete player actions applied between ticks
//!
//! The burner slider and the sandbag buttons take effect immediately, as
//! a whole-state patch, rather than through the per-tick input.

use serde::{Deserialize, Serialize};

use super::state::FlightState;

/// An immediate control action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlAction {
    /// Set the burner to an absolute level (percent)
    SetBurner(f64),
    AddSandbag,
    DropSandbag,
}

/// Apply an action, returning the patched state.
///
/// Actions are ignored once the episode is over; the burner cannot be set
/// with an empty tank, and ballast can only be loaded on the ground.
pub fn apply_control(state: &FlightState, action: ControlAction) -> FlightState {
    if state.is_game_over() {
        return state.clone();
    }

    match action {
        ControlAction::SetBurner(level) => {
            if state.fuel <= 0.0 || !level.is_finite() {
                return state.clone();
            }
            FlightState {
                burner_power: level.clamp(0.0, 100.0),
                ..state.clone()
            }
        }
        ControlAction::AddSandbag if state.is_landed && state.sandbags < state.max_sandbags => {
            FlightState {
                sandbags: state.sandbags + 1,
                ..state.clone()
            }
        }
        ControlAction::DropSandbag if state.sandbags > 0 => FlightState {
            sandbags: state.sandbags - 1,
            ..state.clone()
        },
        _ => state.clone(),
    }
}
