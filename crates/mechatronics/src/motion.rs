//! Trapezoidal point-to-point move for the CodeMotion panel.

use enginuity_core::DomainResult;
use enginuity_core::error::{ensure_at_least, ensure_positive};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Severity;

pub const EFFICIENCY_FLOOR: f64 = 0.8;
pub const ACCURACY_FLOOR: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionProfile {
    /// Cruise speed (m/s).
    pub speed_m_s: f64,
    pub acceleration_m_s2: f64,
    pub distance_m: f64,
    pub payload_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionResult {
    /// Seconds, ramps included.
    pub total_time: f64,
    /// Duration of one ramp (s).
    pub acceleration_time: f64,
    pub constant_speed_time: f64,
    /// Peak drive power (kW).
    pub power: f64,
    /// kWh.
    pub energy_consumption: f64,
    /// N.
    pub max_force: f64,
    pub efficiency: f64,
    pub vibration: Severity,
    pub accuracy: f64,
}

/// Ramp up to `speed_m_s`, cruise, ramp down.
///
/// Both ramps always run to full speed; a move shorter than the two ramps
/// simply has no cruise segment.
pub fn simulate_motion(profile: &MotionProfile) -> DomainResult<MotionResult> {
    let speed = ensure_positive("speed_m_s", profile.speed_m_s)?;
    let acceleration = ensure_positive("acceleration_m_s2", profile.acceleration_m_s2)?;
    let distance = ensure_at_least("distance_m", profile.distance_m, 0.0)?;
    let payload = ensure_at_least("payload_kg", profile.payload_kg, 0.0)?;

    let acceleration_time = speed / acceleration;
    let ramp_distance = 0.5 * acceleration * acceleration_time * acceleration_time;
    let cruise_distance = (distance - 2.0 * ramp_distance).max(0.0);
    let constant_speed_time = cruise_distance / speed;
    let total_time = 2.0 * acceleration_time + constant_speed_time;
    let power = payload * acceleration * speed / 1_000.0;

    debug!(total_time, power, "motion profile");

    Ok(MotionResult {
        total_time,
        acceleration_time,
        constant_speed_time,
        power,
        energy_consumption: power * total_time / 3_600.0,
        max_force: payload * acceleration,
        efficiency: (1.0 - (payload / 1_000.0) * 0.1).max(EFFICIENCY_FLOOR),
        vibration: Severity::grade(speed, 25.0, 50.0),
        accuracy: (1.0 - (speed / 100.0) * 0.05).max(ACCURACY_FLOOR),
    })
}
