//! Flight state and core simulation types
//!
//! Everything that influences the next tick lives in [`FlightState`], so a
//! serialized state replays exactly.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Why an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    /// Touched down faster than the safe landing speed
    Crash,
    /// Reached the top of the playable range
    TooHigh,
    /// Countdown ran out before the first liftoff
    Timeout,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::Crash => "crash",
            GameOverReason::TooHigh => "too_high",
            GameOverReason::Timeout => "timeout",
        }
    }
}

/// Lifecycle state, derived from the flags in [`FlightState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// On the ground, countdown running, never lifted off
    PendingLaunch,
    Airborne,
    /// Back on the ground after a safe landing (or resting there)
    GroundedSafe,
    Crashed,
    EscapedTooHigh,
    TimedOut,
}

impl FlightPhase {
    /// Terminal phases are only left by a full reset
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FlightPhase::Crashed | FlightPhase::EscapedTooHigh | FlightPhase::TimedOut
        )
    }
}

/// Transient score text shown near the balloon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePopup {
    pub text: String,
    /// Tick the popup was emitted on
    pub tick: u64,
}

/// Complete flight state (deterministic, serializable)
///
/// Replaced wholesale by every step; see [`crate::sim::step`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Meters above ground
    pub altitude: f64,
    /// Meters per tick, positive is up
    pub velocity: f64,
    /// Envelope air temperature (°C)
    pub air_temperature: f64,
    /// Burner level (percent)
    pub burner_power: f64,
    /// Remaining fuel (percent)
    pub fuel: f64,
    pub sandbags: u32,
    pub max_sandbags: u32,
    pub is_landed: bool,
    /// Set exactly once, when the episode ends
    pub game_over_reason: Option<GameOverReason>,
    pub max_altitude: f64,
    /// Seconds spent airborne
    pub flight_time: f64,
    /// Seconds left to lift off
    pub countdown: f64,
    pub has_lifted_off: bool,
    pub score: u64,
    /// Airtime seconds toward the next time award
    pub flight_score_accum: f64,
    pub was_above_mountain_line: bool,
    pub was_above_middle_line: bool,
    /// Oldest first
    pub score_popups: Vec<ScorePopup>,
    /// Simulation tick counter (steps taken this episode)
    pub tick: u64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new(&Tuning::default())
    }
}

impl FlightState {
    /// Fresh episode: on the ground, full fuel, countdown running
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            altitude: tuning.ground_level,
            velocity: 0.0,
            air_temperature: tuning.ambient_temp,
            burner_power: 0.0,
            fuel: tuning.max_fuel,
            sandbags: tuning.start_sandbags,
            max_sandbags: tuning.max_sandbags,
            is_landed: true,
            game_over_reason: None,
            max_altitude: 0.0,
            flight_time: 0.0,
            countdown: tuning.countdown_seconds,
            has_lifted_off: false,
            score: 0,
            flight_score_accum: 0.0,
            was_above_mountain_line: false,
            was_above_middle_line: false,
            score_popups: Vec::new(),
            tick: 0,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over_reason.is_some()
    }

    pub fn phase(&self) -> FlightPhase {
        match self.game_over_reason {
            Some(GameOverReason::Crash) => FlightPhase::Crashed,
            Some(GameOverReason::TooHigh) => FlightPhase::EscapedTooHigh,
            Some(GameOverReason::Timeout) => FlightPhase::TimedOut,
            None if !self.has_lifted_off => FlightPhase::PendingLaunch,
            None if self.is_landed => FlightPhase::GroundedSafe,
            None => FlightPhase::Airborne,
        }
    }

    /// Drop popups that have been visible for the full lifetime
    pub fn prune_popups(&mut self, current_tick: u64, lifetime_ticks: u64) {
        self.score_popups
            .retain(|p| current_tick.saturating_sub(p.tick) < lifetime_ticks);
    }
}
