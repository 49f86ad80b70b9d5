//! Plasma confinement state and energy-yield estimate.

use enginuity_core::DomainResult;
use enginuity_core::display::to_fixed;
use enginuity_core::error::ensure_positive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::materials::MaterialProperties;

/// Number of radial zones in the temperature map; zone 0 is the core.
pub const ZONE_COUNT: usize = 10;
/// Fractional temperature loss per zone outward from the core.
pub const ZONE_FALLOFF: f64 = 0.05;
/// Conversion efficiency applied by the yield estimate.
pub const YIELD_EFFICIENCY: f64 = 0.35;
pub const YIELD_NOTES: &str =
    "Yield is based on simplified thermal + magnetic confinement assumptions.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagneticField {
    pub intensity: f64,
    /// Geometry label the caller supplied, carried through untouched.
    pub configuration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureZone {
    pub region: String,
    pub temp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureMap {
    pub average: f64,
    pub distribution: Vec<TemperatureZone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlasmaState {
    pub magnetic_field: MagneticField,
    pub temperature_map: TemperatureMap,
    pub confinement_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyYield {
    /// Yield rendered with two decimals, as displayed.
    pub predicted_yield_mw: String,
    pub yield_mw: f64,
    pub efficiency: f64,
    pub notes: String,
}

/// Evaluate the toy confinement model for `input_power_w` watts.
pub fn simulate_plasma_confinement(
    geometry: &str,
    material: &MaterialProperties,
    input_power_w: f64,
) -> DomainResult<PlasmaState> {
    material.validate()?;
    ensure_positive("input_power_w", input_power_w)?;

    let intensity = input_power_w / (material.permeability * material.area);
    let average = input_power_w / material.heat_capacity;
    let confinement_time = (material.density / input_power_w).sqrt();

    debug!(geometry, input_power_w, average, "plasma confinement");

    Ok(PlasmaState {
        magnetic_field: MagneticField {
            intensity,
            configuration: geometry.to_string(),
        },
        temperature_map: TemperatureMap {
            average,
            distribution: temperature_gradient(average),
        },
        confinement_time,
    })
}

/// Linear falloff from the core temperature, one entry per zone.
pub fn temperature_gradient(core_temp: f64) -> Vec<TemperatureZone> {
    (0..ZONE_COUNT)
        .map(|i| TemperatureZone {
            region: format!("Zone-{}", i + 1),
            temp: core_temp * (1.0 - i as f64 * ZONE_FALLOFF),
        })
        .collect()
}

pub fn calculate_energy_yield(state: &PlasmaState) -> EnergyYield {
    let yield_mw = state.temperature_map.average * state.confinement_time * YIELD_EFFICIENCY;
    EnergyYield {
        predicted_yield_mw: to_fixed(yield_mw, 2),
        yield_mw,
        efficiency: YIELD_EFFICIENCY,
        notes: YIELD_NOTES.to_string(),
    }
}
