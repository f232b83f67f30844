//! End-to-end flight scenarios at the reference tuning

use balloon_flight::consts::*;
use balloon_flight::persistence;
use balloon_flight::sim::{
    ControlAction, FlightPhase, FlightState, GameOverReason, TickInput, apply_control, step,
    step_with,
};
use balloon_flight::Tuning;

fn airborne(altitude: f64, velocity: f64) -> FlightState {
    FlightState {
        altitude,
        velocity,
        is_landed: false,
        has_lifted_off: true,
        ..Default::default()
    }
}

#[test]
fn test_idle_balloon_times_out() {
    let idle = TickInput::default();
    let mut state = FlightState::default();
    assert_eq!(state.sandbags, 4);

    for _ in 0..1000 {
        state = step(&state, 1.0, &idle);
    }
    assert!(!state.has_lifted_off);
    assert!(!state.is_game_over());
    assert_eq!(state.altitude, 0.0);
    assert!(state.is_landed);

    let mut ticks = 1000;
    while !state.is_game_over() {
        state = step(&state, 1.0, &idle);
        ticks += 1;
        assert!(ticks <= 1801, "countdown never ran out");
    }

    // 30 s at 60 ticks/s, give or take float accumulation
    assert!((1799..=1801).contains(&ticks), "timed out at tick {ticks}");
    assert_eq!(state.game_over_reason, Some(GameOverReason::Timeout));
    assert_eq!(state.countdown, 0.0);
    assert_eq!(state.phase(), FlightPhase::TimedOut);
}

#[test]
fn test_full_burner_crosses_mountain_line() {
    let idle = TickInput::default();
    let mut state = apply_control(&FlightState::default(), ControlAction::SetBurner(100.0));

    let crossing_tick = loop {
        let next = step(&state, 1.0, &idle);
        assert!(!next.is_game_over(), "episode ended before the mountain line");
        assert!(next.tick < 2000, "never reached the mountain line");

        if next.was_above_mountain_line && !state.was_above_mountain_line {
            let t = state.tick;
            let airtime: u64 = next
                .score_popups
                .iter()
                .filter(|p| p.tick == t && p.text == "+1")
                .map(|_| TIME_SCORE_POINTS)
                .sum();
            assert!(next.altitude >= MOUNTAIN_LINE_ALTITUDE);
            assert_eq!(next.score - state.score, MOUNTAIN_CROSS_SCORE + airtime);
            state = next;
            break t;
        }
        state = next;
    };

    let has_peak_popup = |s: &FlightState| {
        s.score_popups
            .iter()
            .any(|p| p.tick == crossing_tick && p.text == "+10 Peak!")
    };
    assert!(has_peak_popup(&state));

    // Visible through tick T + 89
    for _ in 0..89 {
        state = step(&state, 1.0, &idle);
        assert!(has_peak_popup(&state), "popup gone early at tick {}", state.tick);
    }
    assert_eq!(state.tick, crossing_tick + 90);

    // Pruned by the step that processes tick T + 90
    state = step(&state, 1.0, &idle);
    assert!(!has_peak_popup(&state));
}

#[test]
fn test_fast_descent_crashes() {
    let state = airborne(1.5, -2.0);
    let next = step(&state, 1.0, &TickInput::default());
    assert!(next.is_game_over());
    assert_eq!(next.game_over_reason, Some(GameOverReason::Crash));
    assert_eq!(next.altitude, 0.0);
    assert_eq!(next.velocity, 0.0);
    assert_eq!(next.burner_power, 0.0);
}

#[test]
fn test_fast_descent_from_five_meters_crashes() {
    // Five meters at -2 m/tick needs three ticks to reach the ground
    let mut state = airborne(5.0, -2.0);
    let mut ticks = 0;
    while !state.is_game_over() {
        state = step(&state, 1.0, &TickInput::default());
        ticks += 1;
        assert!(ticks <= 5);
    }
    assert_eq!(state.game_over_reason, Some(GameOverReason::Crash));
    assert_eq!(state.altitude, 0.0);
    assert_eq!(state.velocity, 0.0);
}

#[test]
fn test_gentle_descent_lands_safely() {
    let mut state = airborne(0.3, -0.5);
    state.max_altitude = 120.0;
    state = step(&state, 1.0, &TickInput::default());
    assert!(!state.is_game_over());
    assert_eq!(state.phase(), FlightPhase::GroundedSafe);

    // And can take off again
    state = apply_control(&state, ControlAction::SetBurner(100.0));
    state.air_temperature = 190.0;
    state = step(&state, 1.0, &TickInput::default());
    assert_eq!(state.phase(), FlightPhase::Airborne);
}

#[test]
fn test_escape_through_the_top() {
    let state = FlightState {
        altitude: 799.0,
        velocity: 5.0,
        is_landed: false,
        ..Default::default()
    };
    let next = step(&state, 1.0, &TickInput::default());
    assert_eq!(next.altitude, SCREEN_MAX_ALTITUDE);
    assert_eq!(next.game_over_reason, Some(GameOverReason::TooHigh));
    assert_eq!(next.velocity, 0.0);
    assert!(next.has_lifted_off);
    assert_eq!(next.max_altitude, SCREEN_MAX_ALTITUDE);
}

#[test]
fn test_descending_through_line_pays_again() {
    let tuning = Tuning::default();
    let mut state = airborne(101.0, -2.0);
    state.was_above_mountain_line = true;
    let out = step_with(&state, 1.0, &TickInput::default(), &tuning);
    assert!(out.state.altitude < MOUNTAIN_LINE_ALTITUDE);
    assert_eq!(out.state.score, MOUNTAIN_CROSS_SCORE);
    assert!(!out.state.was_above_mountain_line);
}

#[test]
fn test_snapshot_replays_bit_identically() {
    let tuning = Tuning::default();
    let input_for = |i: u32| {
        if (i / 40) % 3 == 2 {
            TickInput::default()
        } else {
            TickInput::burning(1.0, &tuning)
        }
    };
    let dt_for = |i: u32| 0.75 + f64::from(i % 7) * 0.125;

    let mut original = FlightState::default();
    for i in 0..400 {
        original = step_with(&original, dt_for(i), &input_for(i), &tuning).state;
    }

    let json = persistence::to_json(&original).unwrap();
    let mut restored = persistence::from_json(&json).unwrap();
    assert_eq!(restored, original);

    for i in 400..800 {
        original = step_with(&original, dt_for(i), &input_for(i), &tuning).state;
        restored = step_with(&restored, dt_for(i), &input_for(i), &tuning).state;
    }

    assert_eq!(restored, original);
    assert_eq!(restored.altitude.to_bits(), original.altitude.to_bits());
    assert_eq!(restored.velocity.to_bits(), original.velocity.to_bits());
    assert_eq!(restored.fuel.to_bits(), original.fuel.to_bits());
}

#[test]
fn test_reset_yields_fresh_episode() {
    let fresh = FlightState::new(&Tuning::default());
    assert_eq!(fresh.altitude, 0.0);
    assert_eq!(fresh.velocity, 0.0);
    assert!(fresh.is_landed);
    assert!(!fresh.is_game_over());
    assert_eq!(fresh.countdown, COUNTDOWN_SECONDS);
    assert_eq!(fresh.fuel, MAX_FUEL);
    assert_eq!(fresh.score, 0);
    assert!(fresh.score_popups.is_empty());
}
