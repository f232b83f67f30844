//! Balloon Flight entry point
//!
//! Headless native run: flies one scripted episode at the nominal frame
//! rate and logs the instrument panel once per simulated second.
//!
//! Tuning is read from the path in `BALLOON_TUNING` or the first argument.
//! Set `BALLOON_SNAPSHOT` to save the final state as a snapshot.

use balloon_flight::consts::{FRAME_MS, TICKS_PER_SECOND};
use balloon_flight::hud::{HudReadout, Overlay};
use balloon_flight::sim::{ControlAction, FlightState, equilibrium_temperature};
use balloon_flight::{Session, Tuning, persistence};

/// Longest scripted flight (ticks)
const MAX_FRAMES: u32 = 60 * 180;
/// Altitude the pilot climbs to before heading back down
const CRUISE_ALTITUDE: f64 = 260.0;
/// Seconds spent near cruise altitude
const CRUISE_SECONDS: f64 = 40.0;

fn main() {
    env_logger::init();
    log::info!("Balloon Flight (native) starting...");

    let tuning = match tuning_path() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Could not load tuning from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let mut session = Session::new(tuning);
    let mut now_ms = 0.0;

    for frame in 0..MAX_FRAMES {
        pilot(&mut session);
        for award in session.frame(now_ms) {
            log::debug!("{award}");
        }
        now_ms += FRAME_MS;

        if frame % TICKS_PER_SECOND as u32 == 0 {
            let hud = HudReadout::from_state(session.state(), session.best_score(), session.tuning());
            log::info!(
                "t={:>4}s alt={:>4}m vs={:>5.1}m/s temp={:>3}C burner={:>3}% fuel={:>3}% score={}",
                frame / TICKS_PER_SECOND as u32,
                hud.altitude_m,
                hud.vertical_speed_mps,
                hud.air_temperature_c,
                hud.burner_percent,
                hud.fuel_percent,
                hud.score
            );
        }

        if session.state().is_game_over() {
            break;
        }
        if let Overlay::SafeLanding { .. } = Overlay::from_state(session.state()) {
            break;
        }
    }

    match Overlay::from_state(session.state()) {
        Overlay::GameOver { title, subtitle, max_altitude_m, .. } => {
            log::info!("{title} {subtitle} Max altitude: {max_altitude_m}m");
        }
        Overlay::SafeLanding { max_altitude_m, flight_time_s } => {
            log::info!("Safe Landing! Max altitude: {max_altitude_m}m | Flight: {flight_time_s}s");
        }
        Overlay::None => log::info!("Flight still in progress"),
    }
    log::info!("Final score: {} (best {})", session.state().score, session.best_score());

    if let Ok(path) = std::env::var("BALLOON_SNAPSHOT") {
        if let Err(e) = persistence::save_to_path(session.state(), &path) {
            log::warn!("Snapshot not saved: {e}");
        }
    }
}

fn tuning_path() -> Option<String> {
    std::env::var("BALLOON_TUNING")
        .ok()
        .or_else(|| std::env::args().nth(1))
}

/// Climb to cruise, hold it for a while, then settle back onto the ground
fn pilot(session: &mut Session) {
    let state = session.state();
    let target = if state.flight_time < CRUISE_SECONDS {
        CRUISE_ALTITUDE
    } else {
        0.0
    };

    let desired_velocity = desired_velocity(state, target);
    let neutral = equilibrium_temperature(state.sandbags, session.tuning());
    let wanted_temp = neutral + (desired_velocity - state.velocity) * 400.0;

    if state.air_temperature < wanted_temp && state.fuel > 0.0 {
        session.set_burner_held(true);
    } else {
        session.set_burner_held(false);
        session.control(ControlAction::SetBurner(0.0));
    }
}

fn desired_velocity(state: &FlightState, target: f64) -> f64 {
    let error = target - state.altitude;
    // Near the ground only a gentle sink is allowed
    let floor = if state.altitude < 40.0 { -0.3 } else { -0.7 };
    (error * 0.02).clamp(floor, 1.2)
}
