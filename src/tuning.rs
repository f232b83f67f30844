//! Data-driven flight balance
//!
//! Every number the simulation uses lives here. The defaults are the
//! reference tuning from [`crate::consts`]; a JSON file may override any
//! subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Physics and scoring tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Forces ===
    pub gravity: f64,
    pub buoyancy_factor: f64,
    pub drag: f64,
    pub sandbag_weight: f64,

    // === Thermal ===
    pub air_cooling_rate: f64,
    pub burner_heat_rate: f64,
    pub ambient_temp: f64,
    pub max_temp: f64,
    pub fuel_consumption_rate: f64,
    pub max_fuel: f64,

    // === Flight envelope ===
    pub screen_max_altitude: f64,
    pub safe_landing_speed: f64,
    pub ground_level: f64,
    pub countdown_seconds: f64,

    // === Scoring ===
    pub mountain_line_altitude: f64,
    pub middle_line_altitude: f64,
    pub time_score_points: u64,
    pub time_score_interval: f64,
    pub mountain_cross_score: u64,
    pub middle_cross_score: u64,
    pub popup_lifetime_ticks: u64,

    // === Episode setup & controls ===
    pub start_sandbags: u32,
    pub max_sandbags: u32,
    pub burner_ramp_per_tick: f64,

    // === Timing ===
    pub ticks_per_second: f64,
    pub max_frame_dt: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            buoyancy_factor: BUOYANCY_FACTOR,
            drag: DRAG,
            sandbag_weight: SANDBAG_WEIGHT,

            air_cooling_rate: AIR_COOLING_RATE,
            burner_heat_rate: BURNER_HEAT_RATE,
            ambient_temp: AMBIENT_TEMP,
            max_temp: MAX_TEMP,
            fuel_consumption_rate: FUEL_CONSUMPTION_RATE,
            max_fuel: MAX_FUEL,

            screen_max_altitude: SCREEN_MAX_ALTITUDE,
            safe_landing_speed: SAFE_LANDING_SPEED,
            ground_level: GROUND_LEVEL,
            countdown_seconds: COUNTDOWN_SECONDS,

            mountain_line_altitude: MOUNTAIN_LINE_ALTITUDE,
            middle_line_altitude: MIDDLE_LINE_ALTITUDE,
            time_score_points: TIME_SCORE_POINTS,
            time_score_interval: TIME_SCORE_INTERVAL,
            mountain_cross_score: MOUNTAIN_CROSS_SCORE,
            middle_cross_score: MIDDLE_CROSS_SCORE,
            popup_lifetime_ticks: POPUP_LIFETIME_TICKS,

            start_sandbags: START_SANDBAGS,
            max_sandbags: MAX_SANDBAGS,
            burner_ramp_per_tick: BURNER_RAMP_PER_TICK,

            ticks_per_second: TICKS_PER_SECOND,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON (missing fields keep defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Seconds of simulated time covered by one tick at the given dt
    #[inline]
    pub fn seconds(&self, dt: f64) -> f64 {
        dt / self.ticks_per_second
    }

    /// Reject tunings that would break the simulation's clamps
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> { Err(Error::InvalidTuning(msg.to_string())) };

        let finite = [
            self.gravity,
            self.buoyancy_factor,
            self.drag,
            self.sandbag_weight,
            self.air_cooling_rate,
            self.burner_heat_rate,
            self.ambient_temp,
            self.max_temp,
            self.fuel_consumption_rate,
            self.max_fuel,
            self.screen_max_altitude,
            self.safe_landing_speed,
            self.ground_level,
            self.countdown_seconds,
            self.mountain_line_altitude,
            self.middle_line_altitude,
            self.time_score_interval,
            self.burner_ramp_per_tick,
            self.ticks_per_second,
            self.max_frame_dt,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return invalid("all values must be finite");
        }

        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return invalid("drag must be in (0, 1]");
        }
        if self.ambient_temp >= self.max_temp {
            return invalid("ambient_temp must be below max_temp");
        }
        if self.ground_level >= self.screen_max_altitude {
            return invalid("ground_level must be below screen_max_altitude");
        }
        let rates = [
            self.gravity,
            self.buoyancy_factor,
            self.sandbag_weight,
            self.air_cooling_rate,
            self.burner_heat_rate,
            self.fuel_consumption_rate,
            self.safe_landing_speed,
            self.burner_ramp_per_tick,
        ];
        if rates.iter().any(|v| *v < 0.0) {
            return invalid("rates must not be negative");
        }
        if self.max_fuel <= 0.0 {
            return invalid("max_fuel must be positive");
        }
        if self.ticks_per_second <= 0.0 || self.time_score_interval <= 0.0 {
            return invalid("ticks_per_second and time_score_interval must be positive");
        }
        if self.max_frame_dt <= 0.0 {
            return invalid("max_frame_dt must be positive");
        }
        if self.countdown_seconds < 0.0 {
            return invalid("countdown_seconds must not be negative");
        }
        if self.start_sandbags > self.max_sandbags {
            return invalid("start_sandbags exceeds max_sandbags");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_table() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.015);
        assert_eq!(t.drag, 0.995);
        assert_eq!(t.screen_max_altitude, 800.0);
        assert_eq!(t.mountain_cross_score, 10);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.02, "max_sandbags": 8 }"#).unwrap();
        assert_eq!(t.gravity, 0.02);
        assert_eq!(t.max_sandbags, 8);
        assert_eq!(t.max_temp, MAX_TEMP);
    }

    #[test]
    fn test_rejects_bad_drag() {
        let err = Tuning::from_json(r#"{ "drag": 1.5 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_inverted_temperatures() {
        let t = Tuning {
            ambient_temp: 250.0,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(Error::Json(_))));
    }
}
