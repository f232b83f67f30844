//! Envelope heating, cooling and fuel burn

use crate::tuning::Tuning;

/// Result of one thermal update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalOutput {
    pub air_temperature: f64,
    pub fuel: f64,
    pub burner_power: f64,
}

/// Heat the envelope from the burner, then relax it toward ambient.
///
/// Temperature stays within `[ambient_temp, max_temp]`, fuel never goes
/// below zero, and the burner is forced off once the tank is empty.
pub fn update_temperature(
    air_temperature: f64,
    burner_power: f64,
    fuel: f64,
    dt: f64,
    tuning: &Tuning,
) -> ThermalOutput {
    let mut air_temperature = air_temperature;
    let mut fuel = fuel;
    let mut burner_power = burner_power;

    if burner_power > 0.0 && fuel > 0.0 {
        let throttle = burner_power / 100.0;
        air_temperature =
            (air_temperature + tuning.burner_heat_rate * throttle * dt).min(tuning.max_temp);
        fuel = (fuel - tuning.fuel_consumption_rate * throttle * dt).max(0.0);
    }

    // Cooling applies every tick, burner or not
    air_temperature = (air_temperature - tuning.air_cooling_rate * dt).max(tuning.ambient_temp);

    if fuel <= 0.0 {
        fuel = 0.0;
        burner_power = 0.0;
    }

    ThermalOutput {
        air_temperature,
        fuel,
        burner_power,
    }
}
