//! Scoring engine
//!
//! Awards points for airtime and for crossing the two altitude lines, and
//! keeps the popup list that shows them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::{FlightState, ScorePopup};
use crate::tuning::Tuning;

/// What earned an award
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardSource {
    /// A full scoring interval of airtime
    Airtime,
    /// Crossed the mountain-peak line
    MountainLine,
    /// Crossed the middle line
    MiddleLine,
}

/// Points awarded during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAward {
    pub source: AwardSource,
    pub points: u64,
}

impl fmt::Display for ScoreAward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            AwardSource::Airtime => write!(f, "+{}", self.points),
            AwardSource::MountainLine => write!(f, "+{} Peak!", self.points),
            AwardSource::MiddleLine => write!(f, "+{} Mid!", self.points),
        }
    }
}

/// Score the post-motion state of a tick that did not end the episode.
///
/// Crossing bonuses fire whenever the at-or-above test disagrees with the
/// latch, so descending through a line pays the same as climbing through it.
pub fn score_tick(
    state: &mut FlightState,
    dt: f64,
    current_tick: u64,
    tuning: &Tuning,
) -> Vec<ScoreAward> {
    state.prune_popups(current_tick, tuning.popup_lifetime_ticks);

    let mut awards = Vec::new();

    if !state.is_landed {
        state.flight_score_accum += tuning.seconds(dt);
        if state.flight_score_accum >= tuning.time_score_interval {
            state.flight_score_accum -= tuning.time_score_interval;
            awards.push(ScoreAward {
                source: AwardSource::Airtime,
                points: tuning.time_score_points,
            });
        }
    }

    let above_mountain = state.altitude >= tuning.mountain_line_altitude;
    if above_mountain != state.was_above_mountain_line && state.has_lifted_off {
        state.was_above_mountain_line = above_mountain;
        awards.push(ScoreAward {
            source: AwardSource::MountainLine,
            points: tuning.mountain_cross_score,
        });
    }

    let above_middle = state.altitude >= tuning.middle_line_altitude;
    if above_middle != state.was_above_middle_line && state.has_lifted_off {
        state.was_above_middle_line = above_middle;
        awards.push(ScoreAward {
            source: AwardSource::MiddleLine,
            points: tuning.middle_cross_score,
        });
    }

    for award in &awards {
        state.score = state.score.saturating_add(award.points);
        state.score_popups.push(ScorePopup {
            text: award.to_string(),
            tick: current_tick,
        });
    }

    awards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn flying_at(altitude: f64) -> FlightState {
        FlightState {
            altitude,
            is_landed: false,
            has_lifted_off: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_airtime_award_every_interval() {
        let t = Tuning::default();
        let mut s = flying_at(50.0);
        s.flight_score_accum = 4.96;

        let awards = score_tick(&mut s, 3.0, 0, &t);
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].source, AwardSource::Airtime);
        assert_eq!(awards[0].to_string(), "+1");
        assert_eq!(s.score, TIME_SCORE_POINTS);
        assert!((s.flight_score_accum - 0.01).abs() < 1e-9);

        assert!(score_tick(&mut s, 3.0, 1, &t).is_empty());
        assert_eq!(s.score, TIME_SCORE_POINTS);
    }

    #[test]
    fn test_airtime_pauses_while_landed() {
        let t = Tuning::default();
        let mut s = flying_at(0.0);
        s.is_landed = true;
        s.flight_score_accum = 4.9;
        let awards = score_tick(&mut s, 3.0, 0, &t);
        assert!(awards.is_empty());
        assert_eq!(s.flight_score_accum, 4.9);
    }

    #[test]
    fn test_mountain_line_both_directions() {
        let t = Tuning::default();
        let mut s = flying_at(MOUNTAIN_LINE_ALTITUDE);
        let up = score_tick(&mut s, 0.0, 1, &t);
        assert_eq!(up.len(), 1);
        assert_eq!(up[0].to_string(), "+10 Peak!");
        assert!(s.was_above_mountain_line);

        // Staying above pays nothing
        assert!(score_tick(&mut s, 0.0, 2, &t).is_empty());

        s.altitude = 99.0;
        let down = score_tick(&mut s, 0.0, 3, &t);
        assert_eq!(down[0].source, AwardSource::MountainLine);
        assert_eq!(s.score, 2 * MOUNTAIN_CROSS_SCORE);
        assert!(!s.was_above_mountain_line);
    }

    #[test]
    fn test_jumping_both_lines_in_one_tick() {
        let t = Tuning::default();
        let mut s = flying_at(450.0);
        let awards = score_tick(&mut s, 0.0, 7, &t);
        assert_eq!(awards.len(), 2);
        assert_eq!(s.score, MOUNTAIN_CROSS_SCORE + MIDDLE_CROSS_SCORE);
        let texts: Vec<_> = s.score_popups.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["+10 Peak!", "+5 Mid!"]);
        assert!(s.score_popups.iter().all(|p| p.tick == 7));
    }

    #[test]
    fn test_no_bonus_before_liftoff() {
        let t = Tuning::default();
        let mut s = flying_at(150.0);
        s.has_lifted_off = false;
        assert!(score_tick(&mut s, 0.0, 0, &t).is_empty());
        assert!(!s.was_above_mountain_line);
    }

    #[test]
    fn test_old_popups_pruned_before_new() {
        let t = Tuning::default();
        let mut s = flying_at(50.0);
        s.score_popups.push(ScorePopup {
            text: "+1".into(),
            tick: 0,
        });
        score_tick(&mut s, 0.0, 89, &t);
        assert_eq!(s.score_popups.len(), 1);
        score_tick(&mut s, 0.0, 90, &t);
        assert!(s.score_popups.is_empty());
    }
}
