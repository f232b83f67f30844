//! Vertical forces and integration
//!
//! Explicit Euler with the velocity updated before the position. The
//! reference tuning assumes this exact order: net force, then drag, then
//! position.

use crate::tuning::Tuning;

/// Advance altitude and velocity by one tick. Returns `(altitude, velocity)`.
pub fn integrate_motion(
    altitude: f64,
    velocity: f64,
    air_temperature: f64,
    sandbags: u32,
    dt: f64,
    tuning: &Tuning,
) -> (f64, f64) {
    let buoyancy = (air_temperature - tuning.ambient_temp) * tuning.buoyancy_factor * dt;
    let ballast = f64::from(sandbags) * tuning.sandbag_weight * dt;
    let gravity = tuning.gravity * dt;

    let mut velocity = velocity + buoyancy - gravity - ballast;
    velocity *= tuning.drag.powf(dt);

    (altitude + velocity * dt, velocity)
}

/// Envelope temperature at which buoyancy exactly cancels gravity and ballast
pub fn equilibrium_temperature(sandbags: u32, tuning: &Tuning) -> f64 {
    let load = tuning.gravity + f64::from(sandbags) * tuning.sandbag_weight;
    tuning.ambient_temp + load / tuning.buoyancy_factor
}
