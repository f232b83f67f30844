//! High score leaderboard
//!
//! Tracks the top 10 finished episodes of the current run. Nothing is
//! written to disk.

use serde::{Deserialize, Serialize};

use crate::sim::{FlightState, GameOverReason};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Peak altitude reached (meters)
    pub max_altitude: f64,
    /// Seconds airborne
    pub flight_time: f64,
    pub reason: Option<GameOverReason>,
    /// Episode number within the run (1-based)
    pub episode: u32,
}

impl HighScoreEntry {
    pub fn from_state(state: &FlightState, episode: u32) -> Self {
        Self {
            score: state.score,
            max_altitude: state.max_altitude,
            flight_time: state.flight_time,
            reason: state.game_over_reason,
            episode,
        }
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether a finished episode with this score would make the board
    pub fn qualifies(&self, score: u64) -> bool {
        self.potential_rank(score).is_some()
    }

    /// 1-based rank a score would take. Zero scores never rank, and a full
    /// board only takes scores above its lowest entry.
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        // Ties rank behind the earlier episode
        let slot = self.entries.partition_point(|e| e.score >= score);
        (slot < MAX_HIGH_SCORES).then_some(slot + 1)
    }

    /// Record a finished episode. Returns its rank, or None if it missed
    /// the board.
    pub fn add_score(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let rank = self.potential_rank(entry.score)?;
        self.entries.insert(rank - 1, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Best score to display while `current` is still being played
    pub fn best_with(&self, current: u64) -> u64 {
        self.top_score().unwrap_or(0).max(current)
    }
}
