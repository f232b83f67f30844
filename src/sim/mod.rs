//! Deterministic simulation module
//!
//! All flight logic lives here. This module must be pure and deterministic:
//! - Every input arrives through `step` arguments
//! - No clocks, no I/O, no global state
//! - States are replaced, never patched in place by callers

pub mod controls;
pub mod flight;
pub mod forces;
pub mod scoring;
pub mod state;
pub mod thermal;
pub mod tick;

pub use controls::{ControlAction, apply_control};
pub use forces::{equilibrium_temperature, integrate_motion};
pub use scoring::{AwardSource, ScoreAward};
pub use state::{FlightPhase, FlightState, GameOverReason, ScorePopup};
pub use thermal::{ThermalOutput, update_temperature};
pub use tick::{StepOutput, TickInput, step, step_with};
