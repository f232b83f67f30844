//! Host-side frame driver
//!
//! Owns the current [`FlightState`] and everything around it that is not
//! simulation: the frame clock, the held burner control, resets and the
//! leaderboard of the run.

use crate::frame_dt;
use crate::highscores::{HighScoreEntry, HighScores};
use crate::sim::{ControlAction, FlightState, ScoreAward, TickInput, apply_control, step_with};
use crate::tuning::Tuning;

/// One player's run: a sequence of episodes
#[derive(Debug, Clone)]
pub struct Session {
    state: FlightState,
    tuning: Tuning,
    burner_held: bool,
    last_time_ms: Option<f64>,
    high_scores: HighScores,
    /// 1-based number of the current episode
    episode: u32,
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: FlightState::new(&tuning),
            tuning,
            burner_held: false,
            last_time_ms: None,
            high_scores: HighScores::new(),
            episode: 1,
        }
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Best score of the run, counting the episode in progress
    pub fn best_score(&self) -> u64 {
        self.high_scores.best_with(self.state.score)
    }

    /// Press or release the burn control
    pub fn set_burner_held(&mut self, held: bool) {
        self.burner_held = held;
    }

    /// Apply an immediate action between frames
    pub fn control(&mut self, action: ControlAction) {
        self.state = apply_control(&self.state, action);
    }

    /// Run one animation frame at wall-clock time `now_ms`.
    ///
    /// The first frame after construction or a reset advances by dt 0.
    pub fn frame(&mut self, now_ms: f64) -> Vec<ScoreAward> {
        let dt = match self.last_time_ms {
            Some(last) => frame_dt(now_ms - last),
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);
        self.advance(dt)
    }

    /// Run one tick with an explicit dt multiplier
    pub fn advance(&mut self, dt: f64) -> Vec<ScoreAward> {
        let input = if self.burner_held {
            TickInput::burning(dt, &self.tuning)
        } else {
            TickInput::default()
        };

        let was_over = self.state.is_game_over();
        let out = step_with(&self.state, dt, &input, &self.tuning);
        self.state = out.state;

        if !was_over && self.state.is_game_over() {
            self.finish_episode();
        }
        out.awards
    }

    /// Start a fresh episode unconditionally
    pub fn reset(&mut self) {
        self.state = FlightState::new(&self.tuning);
        self.burner_held = false;
        self.last_time_ms = None;
        self.episode += 1;
        log::debug!("Episode {} started", self.episode);
    }

    /// Start a fresh episode only if the current one has ended.
    /// Returns whether a reset happened.
    pub fn retry(&mut self) -> bool {
        if !self.state.is_game_over() {
            return false;
        }
        self.reset();
        true
    }

    fn finish_episode(&mut self) {
        let reason = self
            .state
            .game_over_reason
            .map(|r| r.as_str())
            .unwrap_or("none");
        log::info!(
            "Episode {} over ({}): score {}, max altitude {:.0} m, flight {:.1} s",
            self.episode,
            reason,
            self.state.score,
            self.state.max_altitude,
            self.state.flight_time
        );

        let entry = HighScoreEntry::from_state(&self.state, self.episode);
        if let Some(rank) = self.high_scores.add_score(entry) {
            log::info!("New high score #{}: {}", rank, self.state.score);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
